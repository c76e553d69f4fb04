use std::collections::HashMap;

use serde::Serialize;

/// Entry of the currency reference table
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrencyEntry {
    pub code: String,
    pub display_name: String,
    pub symbol: String,
}
impl CurrencyEntry {
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Read-only table of known currencies keyed by their 3-letter code.
///
/// Built once at startup and shared between handlers behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    entries: HashMap<String, CurrencyEntry>,
}
impl CurrencyTable {
    pub fn new(entries: impl IntoIterator<Item = CurrencyEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.code.clone(), e))
            .collect::<HashMap<_, _>>();
        Self { entries }
    }
    /// Currencies served by the exchange endpoint
    pub fn standard() -> Self {
        Self::new([
            CurrencyEntry::new("USD", "Dólar americano", "$"),
            CurrencyEntry::new("BRL", "Real brasileiro", "R$"),
            CurrencyEntry::new("EUR", "Euro", "€"),
        ])
    }
    pub fn get(&self, code: &str) -> Option<&CurrencyEntry> {
        self.entries.get(code)
    }
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }
    pub fn symbol(&self, code: &str) -> Option<&str> {
        self.get(code).map(|e| e.symbol.as_str())
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
