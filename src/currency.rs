//! Currency table and price formatting
//!
//! One static table drives everything: display symbol, fractional digits
//! and symbol placement per ISO 4217 code. Codes missing from the table
//! degrade to the uppercased code as symbol, two decimals, symbol before
//! the amount.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display properties of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Display symbol; `None` renders the uppercased code instead
    pub symbol: Option<&'static str>,
    /// Fractional digits shown for amounts
    pub decimals: u8,
    /// Symbol appended after the amount instead of prepended
    pub symbol_after: bool,
}

const fn prefixed(symbol: &'static str) -> CurrencyInfo {
    CurrencyInfo {
        symbol: Some(symbol),
        decimals: 2,
        symbol_after: false,
    }
}

const fn suffixed(symbol: &'static str) -> CurrencyInfo {
    CurrencyInfo {
        symbol: Some(symbol),
        decimals: 2,
        symbol_after: true,
    }
}

/// Whole-unit currency, no fractional digits
const fn whole(symbol: &'static str) -> CurrencyInfo {
    CurrencyInfo {
        symbol: Some(symbol),
        decimals: 0,
        symbol_after: false,
    }
}

/// Whole-unit currency with no dedicated symbol
const UNSYMBOLED_WHOLE: CurrencyInfo = CurrencyInfo {
    symbol: None,
    decimals: 0,
    symbol_after: false,
};

#[rustfmt::skip]
const CURRENCY_TABLE: &[(&str, CurrencyInfo)] = &[
    ("USD", prefixed("$")),
    ("EUR", suffixed("€")),
    ("GBP", prefixed("£")),
    ("JPY", whole("¥")),
    ("CNY", prefixed("¥")),
    ("KRW", whole("₩")),
    ("VND", CurrencyInfo { symbol: Some("₫"), decimals: 0, symbol_after: true }),
    ("THB", prefixed("฿")),
    ("SGD", prefixed("S$")),
    ("MYR", prefixed("RM")),
    ("IDR", whole("Rp")),
    ("PHP", prefixed("₱")),
    ("INR", prefixed("₹")),
    ("AUD", prefixed("A$")),
    ("CAD", prefixed("C$")),
    ("CHF", prefixed("CHF")),
    ("SEK", suffixed("kr")),
    ("NOK", suffixed("kr")),
    ("DKK", suffixed("kr")),
    ("PLN", suffixed("zł")),
    ("CZK", suffixed("Kč")),
    ("HUF", suffixed("Ft")),
    ("RUB", prefixed("₽")),
    ("BRL", prefixed("R$")),
    ("MXN", prefixed("$")),
    ("ARS", prefixed("$")),
    ("CLP", whole("$")),
    ("COP", prefixed("$")),
    ("PEN", prefixed("S/")),
    ("TRY", prefixed("₺")),
    ("ZAR", prefixed("R")),
    ("EGP", prefixed("E£")),
    ("AED", prefixed("د.إ")),
    ("SAR", prefixed("﷼")),
    ("QAR", prefixed("﷼")),
    ("KWD", prefixed("د.ك")),
    ("BHD", prefixed(".د.ب")),
    ("OMR", prefixed("﷼")),
    ("JOD", prefixed("د.ا")),
    ("LBP", prefixed("£")),
    ("ILS", prefixed("₪")),
    ("PKR", prefixed("₨")),
    ("BDT", prefixed("৳")),
    ("LKR", prefixed("₨")),
    ("NPR", prefixed("₨")),
    ("MMK", prefixed("K")),
    ("LAK", prefixed("₭")),
    ("KHR", prefixed("៛")),
    // whole-unit currencies with no display symbol of their own
    ("KMF", UNSYMBOLED_WHOLE),
    ("DJF", UNSYMBOLED_WHOLE),
    ("GNF", UNSYMBOLED_WHOLE),
    ("ISK", UNSYMBOLED_WHOLE),
    ("PYG", UNSYMBOLED_WHOLE),
    ("RWF", UNSYMBOLED_WHOLE),
    ("UGX", UNSYMBOLED_WHOLE),
    ("VUV", UNSYMBOLED_WHOLE),
    ("XAF", UNSYMBOLED_WHOLE),
    ("XOF", UNSYMBOLED_WHOLE),
    ("XPF", UNSYMBOLED_WHOLE),
];

static CURRENCIES: Lazy<HashMap<&'static str, CurrencyInfo>> =
    Lazy::new(|| CURRENCY_TABLE.iter().copied().collect());

/// Look up the display properties of a currency code.
pub fn lookup(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.get(code.to_uppercase().as_str())
}

/// Display symbol for a currency code.
///
/// Unknown codes fall back to the uppercased code itself.
pub fn symbol(code: &str) -> String {
    let upper = code.to_uppercase();

    match CURRENCIES.get(upper.as_str()) {
        Some(info) => info.symbol.map_or(upper, str::to_string),
        None => upper,
    }
}

/// Fractional digits used when formatting amounts of a currency.
pub fn decimals(code: &str) -> u8 {
    lookup(code).map_or(2, |info| info.decimals)
}

/// Format a bare amount with thousands grouping and fixed decimals.
///
/// Rounds half away from zero, groups the integer part with `,` and uses
/// `.` as decimal point.
pub fn format_amount(value: f64, decimals: u8) -> String {
    let factor = 10f64.powi(i32::from(decimals));
    let scaled = (value.abs() * factor).round() as u128;
    let unit = factor as u128;

    let mut formatted = group_thousands(scaled / unit);

    if decimals > 0 {
        let frac = scaled % unit;
        formatted.push('.');
        formatted.push_str(&format!("{:0width$}", frac, width = decimals as usize));
    }

    if value.is_sign_negative() && scaled > 0 {
        formatted.insert(0, '-');
    }

    formatted
}

/// Format a price in the given currency, symbol placed per the table.
///
/// A missing price counts as zero.
pub fn format_price(price: Option<f64>, code: &str) -> String {
    let price = price.unwrap_or(0.0);
    let info = lookup(code);

    let amount = format_amount(price, info.map_or(2, |i| i.decimals));
    let symbol = symbol(code);

    if info.is_some_and(|i| i.symbol_after) {
        format!("{amount} {symbol}")
    } else {
        format!("{symbol} {amount}")
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
