use std::{collections::HashMap, sync::Arc};

use crate::models::{CurrencyTable, ValidationResult};

/// Single validation check applied to one field
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    Number,
    Length(usize),
    In(Arc<CurrencyTable>),
    /// Rule name the validator does not know; always fails
    Unregistered(String),
}
impl Rule {
    /// Base name reported as the failed rule type
    pub fn name(&self) -> &str {
        match self {
            Rule::Required => "required",
            Rule::Number => "number",
            Rule::Length(_) => "length",
            Rule::In(_) => "in",
            Rule::Unregistered(name) => name,
        }
    }
    fn check(&self, value: Option<&str>) -> bool {
        let value = value.unwrap_or_default();
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Number => parse_number(value).is_some_and(|n| n > 0.0),
            Rule::Length(n) => value.chars().count() == *n,
            Rule::In(table) => table.contains(value),
            Rule::Unregistered(_) => false,
        }
    }
    fn message(&self, field: &str) -> String {
        match self {
            Rule::Required => format!("Field '{field}' is required."),
            Rule::Number => format!("Field '{field}' must be a valid number."),
            Rule::Length(n) => format!("Field '{field}' must be {n} characters."),
            Rule::In(_) => format!("Field '{field}' must be valid."),
            Rule::Unregistered(_) => String::from("Unregistered validation error."),
        }
    }
}

/// A named field with its value and ordered rules
#[derive(Debug, Clone)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub rules: Vec<Rule>,
}
impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: Option<&'a str>, rules: Vec<Rule>) -> Self {
        Self { name, value, rules }
    }
}

/// Parses a numeric literal: optional sign, digits with at most one
/// decimal point, optional exponent, surrounding whitespace allowed.
/// Non-finite results (`inf`, `NaN`, overflow) are rejected.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let allowed = |b: u8| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E');
    if !trimmed.bytes().all(allowed) || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Runs `rules` in order against `value`, stopping at the first failure
pub fn validate_field(value: Option<&str>, rules: &[Rule], field: &str) -> ValidationResult {
    match rules.iter().find(|rule| !rule.check(value)) {
        Some(rule) => {
            tracing::debug!("field '{field}' failed rule '{}'", rule.name());
            ValidationResult::failure(rule.name(), rule.message(field))
        }
        None => ValidationResult::success(),
    }
}

/// Validates fields in their declared order and returns the first failure
pub fn validate_all(fields: &[Field<'_>]) -> ValidationResult {
    fields
        .iter()
        .map(|f| validate_field(f.value, &f.rules, f.name))
        .find(|r| !r.is_valid())
        .unwrap_or_else(ValidationResult::success)
}

/// Turns pipe-delimited rule specs (`required|length:3|in:currencies`) into
/// typed rules. Tables referenced by `in:<name>` must be registered first.
/// `ExchangeService` builds its field rules through this once at startup.
#[derive(Debug, Clone, Default)]
pub struct RuleParser {
    tables: HashMap<String, Arc<CurrencyTable>>,
}
impl RuleParser {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_table(mut self, name: impl Into<String>, table: Arc<CurrencyTable>) -> Self {
        self.tables.insert(name.into(), table);
        self
    }
    pub fn parse(&self, spec: &str) -> Vec<Rule> {
        spec.split('|').map(|token| self.parse_token(token)).collect()
    }
    fn parse_token(&self, token: &str) -> Rule {
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };
        match (name, arg) {
            ("required", None) => Rule::Required,
            ("number", None) => Rule::Number,
            ("length", Some(n)) => n
                .parse()
                .map(Rule::Length)
                .unwrap_or_else(|_| Rule::Unregistered(name.to_string())),
            ("in", Some(table)) => self
                .tables
                .get(table)
                .map(|t| Rule::In(t.clone()))
                .unwrap_or_else(|| Rule::Unregistered(name.to_string())),
            _ => Rule::Unregistered(name.to_string()),
        }
    }
}
