//! Keyword heuristic that decides whether a message reads like a UPI transaction alert.

const TRANSACTION_KEYWORDS: &[&str] = &[
    "upi",
    "credited",
    "debited",
    "payment",
    "paid",
    "transaction",
    "transfer",
];

// "rs" is a plain substring check and also hits words like "hours" or "transfers".
const CURRENCY_MARKERS: &[&str] = &["rs", "₹"];

const BALANCE_MOVEMENTS: &[&str] = &["credited", "debited"];

/// Returns `true` when `body` plausibly describes a UPI transaction.
///
/// Matching is case-insensitive. A currency marker only counts together with a
/// credited/debited mention, which the keyword list already covers on its own.
pub fn is_transaction(body: &str) -> bool {
    let lower = body.to_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    contains_any(TRANSACTION_KEYWORDS)
        || (contains_any(CURRENCY_MARKERS) && contains_any(BALANCE_MOVEMENTS))
}
