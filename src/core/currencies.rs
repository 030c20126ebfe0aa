//! ISO 4217 currency codes seen on CRS account balances.
//!
//! Unknown codes are still reported as-is; the table only drives a
//! warning in the mapper.

/// Check whether `code` is in the known ISO 4217 table.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", "AUD", "BHD", "BMD", "BRL", "BSD", "BWP", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR",
    "GBP", "GHS", "HKD", "HUF", "IDR", "ILS", "INR", "ISK", "JPY", "KES", "KRW", "KWD", "KYD",
    "MUR", "MXN", "MYR", "NGN", "NOK", "NZD", "OMR", "PHP", "PLN", "QAR", "RON", "SAR", "SCR",
    "SEK", "SGD", "THB", "TRY", "TWD", "TZS", "UGX", "USD", "ZAR",
];
