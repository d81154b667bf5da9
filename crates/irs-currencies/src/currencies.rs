//! Built-in currency constants.

use crate::currency::Currency;

/// United States Dollar.
pub static USD: Currency = Currency {
    name: "United States Dollar",
    code: "USD",
    numeric_code: 840,
    symbol: "$",
    fractions_per_unit: 100,
};

/// Euro.
pub static EUR: Currency = Currency {
    name: "Euro",
    code: "EUR",
    numeric_code: 978,
    symbol: "\u{20ac}",
    fractions_per_unit: 100,
};

/// Pound Sterling.
pub static GBP: Currency = Currency {
    name: "Pound Sterling",
    code: "GBP",
    numeric_code: 826,
    symbol: "\u{a3}",
    fractions_per_unit: 100,
};

/// Japanese Yen.
pub static JPY: Currency = Currency {
    name: "Japanese Yen",
    code: "JPY",
    numeric_code: 392,
    symbol: "\u{a5}",
    fractions_per_unit: 100,
};

/// Swiss Franc.
pub static CHF: Currency = Currency {
    name: "Swiss Franc",
    code: "CHF",
    numeric_code: 756,
    symbol: "CHF",
    fractions_per_unit: 100,
};

/// Mexican Peso.
pub static MXN: Currency = Currency {
    name: "Mexican Peso",
    code: "MXN",
    numeric_code: 484,
    symbol: "$",
    fractions_per_unit: 100,
};
