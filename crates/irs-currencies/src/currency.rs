//! `Currency` — definition and metadata for a financial currency.

use irs_core::Integer;

/// Data describing a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "United States Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Symbol used in financial notation (e.g. "$").
    pub symbol: &'static str,
    /// Number of fractional units per whole unit (e.g. 100 for cents).
    pub fractions_per_unit: Integer,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
