use crate::domain::amount::Amount;
use crate::error::Result;
use regex::Regex;
use std::fmt;
use tracing::debug;

/// Pattern rules in the order they are tried.
///
/// Earlier rules carry a stronger signal that the number really is a rupee amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionRule {
    /// `Rs. 1,234.50`, `INR 500`, `amount: 20`
    CurrencyPrefixed,
    /// `500 INR`, `12,34 rupees`
    CurrencySuffixed,
    /// A lone Indian-grouped number such as `12,34` or `7.5`.
    GroupedNumber,
}

impl ExtractionRule {
    pub const ALL: [ExtractionRule; 3] = [
        ExtractionRule::CurrencyPrefixed,
        ExtractionRule::CurrencySuffixed,
        ExtractionRule::GroupedNumber,
    ];

    // Tokens are spelled with ASCII-only case classes: `(?i)` would also fold
    // characters such as U+017F (long s) into `s`.
    fn pattern(self) -> &'static str {
        match self {
            ExtractionRule::CurrencyPrefixed => concat!(
                r"(?:[rR][sS]|[iI][nN][rR]|₹|[rR][uU][pP][eE][eE][sS]?",
                r"|[aA][mM][oO][uU][nN][tT]|[aA][mM][tT])",
                r"\.?\s*:?\s*([0-9,]+(?:\.[0-9]{1,2})?)",
            ),
            ExtractionRule::CurrencySuffixed => concat!(
                r"([0-9,]+(?:\.[0-9]{1,2})?)\s*",
                r"(?:[rR][sS]|[iI][nN][rR]|₹|[rR][uU][pP][eE][eE][sS]?)",
            ),
            // Kept narrow on purpose: phone numbers and long ids must not match.
            ExtractionRule::GroupedNumber => r"\b([0-9]{1,2}(?:,[0-9]{2})*(?:\.[0-9]{1,2})?)\b",
        }
    }
}

impl fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionRule::CurrencyPrefixed => "currency-prefixed",
            ExtractionRule::CurrencySuffixed => "currency-suffixed",
            ExtractionRule::GroupedNumber => "grouped-number",
        };
        f.write_str(name)
    }
}

/// The first candidate that survived validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub amount: Amount,
    pub rule: ExtractionRule,
    /// Candidate text as it appeared in the message, grouping commas included.
    pub matched: String,
}

struct CompiledRule {
    rule: ExtractionRule,
    regex: Regex,
}

/// Pulls a monetary amount out of free text using an ordered list of regexes.
pub struct AmountExtractor {
    rules: Vec<CompiledRule>,
}

impl AmountExtractor {
    pub fn new() -> Result<Self> {
        let rules = ExtractionRule::ALL
            .into_iter()
            .map(|rule| -> Result<CompiledRule> {
                Ok(CompiledRule {
                    rule,
                    regex: Regex::new(rule.pattern())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Returns the first valid amount, trying every match of a rule before moving on to
    /// the next rule.
    pub fn extract_amount(&self, body: &str) -> Option<ExtractionResult> {
        for compiled in &self.rules {
            for captures in compiled.regex.captures_iter(body) {
                let Some(candidate) = captures.get(1) else {
                    continue;
                };

                match Amount::parse_candidate(candidate.as_str()) {
                    Some(amount) => {
                        return Some(ExtractionResult {
                            amount,
                            rule: compiled.rule,
                            matched: candidate.as_str().to_string(),
                        });
                    }
                    None => {
                        debug!(
                            rule = %compiled.rule,
                            candidate = candidate.as_str(),
                            "Rejected amount candidate"
                        );
                    }
                }
            }
        }
        None
    }
}
