use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Raw path parameters of the exchange endpoint. Omitted segments stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExchangeParams {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub rate: Option<String>,
}
impl ExchangeParams {
    pub fn new(
        amount: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            from: Some(from.into()),
            to: Some(to.into()),
            rate: Some(rate.into()),
        }
    }
}

/// Typed conversion input, only constructed from validated parameters
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ConversionRequest {
    pub amount: f64,
    #[builder(setter(into))]
    pub from: String,
    #[builder(setter(into))]
    pub to: String,
    pub rate: f64,
}
impl ConversionRequest {
    pub fn builder() -> ConversionRequestBuilder {
        ConversionRequestBuilder::default()
    }
}
impl ConversionRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        let not_positive = |v: Option<f64>| v.is_some_and(|v| !v.is_finite() || v <= 0.0);
        if not_positive(self.amount) {
            Err(String::from("amount must be a positive number"))
        } else if not_positive(self.rate) {
            Err(String::from("rate must be a positive number"))
        } else {
            Ok(())
        }
    }
}

/// Response body of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    #[serde(rename = "valorConvertido")]
    pub converted_value: f64,
    #[serde(rename = "simboloMoeda")]
    pub currency_symbol: Option<String>,
}

/// Outcome of validating a field (or a whole request)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(rename = "type")]
    pub failed_rule: String,
    pub message: String,
}
impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            failed_rule: String::new(),
            message: String::from("valid"),
        }
    }
    pub fn failure(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            failed_rule: rule.into(),
            message: message.into(),
        }
    }
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_conversion_request_builder_success() -> Result<()> {
        let request = ConversionRequest::builder()
            .amount(10.0)
            .from("USD")
            .to("BRL")
            .rate(5.2)
            .build()?;
        assert_eq!(request.from, "USD");
        assert_eq!(request.rate, 5.2);
        Ok(())
    }
    #[test]
    fn test_conversion_request_builder_failed() {
        let without_rate = ConversionRequest::builder()
            .amount(10.0)
            .from("USD")
            .to("BRL")
            .build();
        assert!(without_rate.is_err());
        let negative_amount = ConversionRequest::builder()
            .amount(-1.0)
            .from("USD")
            .to("BRL")
            .rate(5.2)
            .build();
        assert!(negative_amount.is_err());
        let infinite_rate = ConversionRequest::builder()
            .amount(1.0)
            .from("USD")
            .to("BRL")
            .rate(f64::INFINITY)
            .build();
        assert!(infinite_rate.is_err());
    }
    #[test]
    fn test_result_serialization() -> Result<()> {
        let result = ConversionResult {
            converted_value: 52.0,
            currency_symbol: Some(String::from("R$")),
        };
        let json = serde_json::to_value(&result)?;
        assert_eq!(
            json,
            serde_json::json!({ "valorConvertido": 52.0, "simboloMoeda": "R$" })
        );
        let unknown = ConversionResult {
            converted_value: 1.5,
            currency_symbol: None,
        };
        assert_eq!(
            serde_json::to_value(&unknown)?,
            serde_json::json!({ "valorConvertido": 1.5, "simboloMoeda": null })
        );
        Ok(())
    }
    #[test]
    fn test_validation_result_serialization() -> Result<()> {
        let failure = ValidationResult::failure("length", "Field 'from' must be 3 characters.");
        assert_eq!(
            serde_json::to_value(&failure)?,
            serde_json::json!({
                "valid": false,
                "type": "length",
                "message": "Field 'from' must be 3 characters."
            })
        );
        let success = ValidationResult::success();
        assert!(success.is_valid());
        assert!(success.failed_rule.is_empty());
        assert_eq!(success.message, "valid");
        Ok(())
    }
}
