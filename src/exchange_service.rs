use std::sync::Arc;

use tracing::instrument;

use crate::{
    conversion_service::ConversionService,
    models::{ConversionRequest, ConversionResult, CurrencyTable, ExchangeParams},
    validator::{parse_number, validate_all, Field, Rule, RuleParser},
    AppError, Result,
};

const NUMBER_RULES: &str = "required|number";
const CURRENCY_RULES: &str = "required|length:3|in:currencies";

/// Validates exchange parameters and runs the conversion
#[derive(Debug, Clone)]
pub struct ExchangeService {
    number_rules: Vec<Rule>,
    currency_rules: Vec<Rule>,
    conversion: ConversionService,
}

impl ExchangeService {
    pub fn new(currencies: Arc<CurrencyTable>) -> Self {
        let parser = RuleParser::new().with_table("currencies", currencies.clone());
        ExchangeService {
            number_rules: parser.parse(NUMBER_RULES),
            currency_rules: parser.parse(CURRENCY_RULES),
            conversion: ConversionService::new(currencies),
        }
    }

    #[instrument(name = "exchange", skip(self))]
    pub fn exchange(&self, params: &ExchangeParams) -> Result<ConversionResult> {
        let validation = validate_all(&self.fields(params));
        if !validation.is_valid() {
            return Err(AppError::Validation(validation));
        }
        let request = to_request(params)?;
        let converted_value = self.conversion.convert(request.amount, request.rate);
        if !converted_value.is_finite() {
            return Err(AppError::Dispatch(String::from(
                "Inf and NaN cannot be JSON encoded",
            )));
        }
        let currency_symbol = self.conversion.resolve_symbol(&request.to).map(String::from);
        tracing::debug!(
            "converted {} {} to {converted_value} {}",
            request.amount,
            request.from,
            request.to
        );
        Ok(ConversionResult {
            converted_value,
            currency_symbol,
        })
    }

    // amount, from, to, rate: the order failures are reported in
    fn fields<'a>(&self, params: &'a ExchangeParams) -> Vec<Field<'a>> {
        vec![
            Field::new("amount", params.amount.as_deref(), self.number_rules.clone()),
            Field::new("from", params.from.as_deref(), self.currency_rules.clone()),
            Field::new("to", params.to.as_deref(), self.currency_rules.clone()),
            Field::new("rate", params.rate.as_deref(), self.number_rules.clone()),
        ]
    }
}

fn to_request(params: &ExchangeParams) -> Result<ConversionRequest> {
    let number = |v: &Option<String>| v.as_deref().and_then(parse_number).unwrap_or_default();
    let request = ConversionRequest::builder()
        .amount(number(&params.amount))
        .from(params.from.clone().unwrap_or_default())
        .to(params.to.clone().unwrap_or_default())
        .rate(number(&params.rate))
        .build()?;
    Ok(request)
}
