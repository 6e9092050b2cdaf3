//! # Bulk Order Parser
//!
//! Converts free-text bulk orders into priced, quantity-aggregated lines.
//!
//! ## What It Handles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "10 shirts, 5 trousers"        → shirt_polo ×10, trouser ×5           │
//! │  "2 suits, 1 wedding gown"      → suit_2pc ×2, wedding_gown ×1         │
//! │  "3x polo shirts"               → shirt_polo ×3                        │
//! │  "5 jeans and 2 bedsheets"      → trouser ×5, bedsheet_double ×2       │
//! │  "ten shirts"                   → shirt_polo ×10                       │
//! │  "17 unicorns"                  → (no line - unmatched text drops)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching Pipeline
//! ```text
//! input text
//!     │  split on "," / newline / " and " (case-insensitive)
//!     ▼
//! candidate lines ──► quantity extraction ("10", "10x", "10 *", "ten")
//!     │                      defaults to 1 when no pattern matches
//!     ▼
//! lowercased remainder ──► keyword table
//!     │     exact keyword match wins immediately;
//!     │     otherwise best substring candidate by
//!     │     priority + keyword_len/remainder_len × 10
//!     ▼
//! (service_key, quantity) ──► aggregate by key, first-seen order
//! ```
//!
//! This is a deliberately simple scored-keyword heuristic, not a tokenizer
//! or NER model. Walk-in staff type loose text; the table absorbs the
//! vocabulary, the algorithm stays fixed.
//!
//! ## No Failure Modes
//! Parsing never errors: unmatched lines contribute nothing, malformed
//! quantities fall back to 1, empty input yields an empty list. A forgiving
//! surface for non-technical staff is the contract. Forgiving is still
//! bounded: typed quantities clamp to [`crate::MAX_LINE_QUANTITY`] per line
//! and the output stops growing at [`crate::MAX_ORDER_LINES`] distinct
//! lines, so hostile or fat-fingered input cannot blow up pricing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ParsedOrderLine;
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_LINES};

// =============================================================================
// Regex Patterns
// =============================================================================

/// Line boundaries: comma, newline, or the word "and" between spaces.
static LINE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[,\n]|\s+and\s+").expect("line split regex is valid"));

/// Leading integer quantity with optional `x`/`*` separator:
/// "10 shirts", "10x shirts", "10 * shirts".
static QTY_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+)\s*[x*]?\s*(.+)$").expect("numeric quantity regex is valid"));

/// Leading English quantity word for 1-10: "ten shirts".
static QTY_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(one|two|three|four|five|six|seven|eight|nine|ten)\s+(.+)$")
        .expect("word quantity regex is valid")
});

// =============================================================================
// Keyword Table
// =============================================================================

/// Keywords and ranking priority for one service key.
///
/// Keywords must be lower-case; priority is a small positive integer used
/// only for relative ranking among overlapping matches.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceKeywords {
    /// Service key the keywords resolve to, e.g. `wedding_gown`.
    pub service_key: String,
    /// Lower-case match phrases, most specific first by convention.
    pub keywords: Vec<String>,
    /// Ranking weight: "wedding gown" (10) must outrank "shirt" (4) when
    /// both are substrings of the same line.
    pub priority: u32,
}

/// An ordered service-key → keywords mapping.
///
/// The table is configuration, not logic: it is injected into the parser
/// (the catalog layer loads it from a JSON file) so vocabulary changes
/// never touch the matching algorithm. Entry order breaks score ties, so
/// it is part of the contract: given a fixed table, matching is
/// deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeywordTable {
    entries: Vec<ServiceKeywords>,
}

impl KeywordTable {
    /// Builds a table from ordered entries.
    pub fn new(entries: Vec<ServiceKeywords>) -> Self {
        KeywordTable { entries }
    }

    /// The entries in ranking/tie-break order.
    pub fn entries(&self) -> &[ServiceKeywords] {
        &self.entries
    }

    /// The built-in vocabulary the service launched with.
    ///
    /// Kept as a fallback and for tests; production deployments load the
    /// table from catalog configuration so it can change without a deploy.
    pub fn builtin() -> Self {
        fn entry(service_key: &str, keywords: &[&str], priority: u32) -> ServiceKeywords {
            ServiceKeywords {
                service_key: service_key.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                priority,
            }
        }

        // Specific items get higher priority
        KeywordTable::new(vec![
            entry(
                "wedding_gown",
                &["wedding gown", "wedding dress", "bridal gown", "bridal dress", "bride gown"],
                10,
            ),
            entry(
                "evening_gown",
                &["evening gown", "evening dress", "dinner gown", "formal gown"],
                9,
            ),
            entry(
                "agbada",
                &["agbada", "3-piece", "3 piece", "three piece", "complete agbada"],
                8,
            ),
            entry(
                "native_senator",
                &["native", "senator", "2pc native", "2-piece native", "2 piece native", "senator wear"],
                8,
            ),
            entry(
                "suit_2pc",
                &["suit", "suits", "2-piece suit", "2 piece suit", "two piece suit", "formal suit"],
                7,
            ),
            entry(
                "kaftan",
                &["kaftan", "jalabiya", "kaftans", "jalabias", "caftan"],
                7,
            ),
            entry(
                "blazer",
                &["blazer", "jacket", "blazers", "jackets", "sport coat", "sports jacket"],
                6,
            ),
            entry(
                "shirt_long",
                &["long sleeve", "long-sleeve", "longsleeve", "long sleeve shirt", "formal shirt"],
                5,
            ),
            entry(
                "shirt_polo",
                &["shirt", "polo", "shirts", "polos", "t-shirt", "tshirt", "tee", "top"],
                4,
            ),
            entry(
                "trouser",
                &["trouser", "trousers", "jeans", "jean", "pant", "pants", "slacks", "chinos"],
                4,
            ),
            entry(
                "bedsheet_double",
                &["bedsheet", "bed sheet", "sheets", "bed sheets", "linen", "bedding"],
                6,
            ),
            entry(
                "duvet_large",
                &["duvet", "duvets", "comforter", "comforters", "blanket", "quilt"],
                6,
            ),
            entry(
                "rug_cleaning",
                &["rug", "rugs", "carpet", "carpets", "mat", "mats"],
                6,
            ),
            entry(
                "tie_scarf",
                &["tie", "scarf", "ties", "scarves", "necktie", "bow tie"],
                3,
            ),
        ])
    }

    /// Resolves a lowercased remainder phrase to a service key.
    ///
    /// Exact keyword equality wins immediately. Otherwise every keyword
    /// that is a substring of the remainder scores
    /// `priority + keyword_len/remainder_len × 10` and the best candidate
    /// wins; ties go to the first entry in table order.
    pub fn best_match(&self, remainder: &str) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;

        for entry in &self.entries {
            for keyword in &entry.keywords {
                // Exact match gets highest score
                if remainder == keyword {
                    return Some(&entry.service_key);
                }

                // Contains match with priority weighting
                if remainder.contains(keyword.as_str()) {
                    let score = entry.priority as f64
                        + (keyword.len() as f64 / remainder.len() as f64) * 10.0;
                    // Strict > keeps the first-encountered entry on ties
                    if best.map_or(true, |(_, s)| score > s) {
                        best = Some((&entry.service_key, score));
                    }
                }
            }
        }

        best.map(|(key, _)| key)
    }
}

// =============================================================================
// Unmatched Policy
// =============================================================================

/// What to do with a line no keyword matches.
///
/// Two revisions of the checkout shipped with different behavior here:
/// one silently billed every unmatched line as a default service, a later
/// one dropped unmatched lines. The behavior is now explicit configuration
/// so neither can sneak back in unnoticed. `Drop` is the default: silently
/// charging a guessed price for "17 unicorns" is worse than charging
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Unmatched lines contribute nothing (strict variant).
    #[default]
    Drop,
    /// Unmatched lines resolve to this service key (historical variant).
    DefaultTo(String),
}

// =============================================================================
// Order Parser
// =============================================================================

/// The bulk-order text parser: a keyword table plus an unmatched policy.
///
/// Pure and synchronous - safe to call from any thread, allocates only
/// local data, reads only the injected table snapshot.
#[derive(Debug, Clone)]
pub struct OrderParser {
    table: KeywordTable,
    policy: UnmatchedPolicy,
}

impl OrderParser {
    /// Creates a parser over an injected keyword table.
    pub fn new(table: KeywordTable, policy: UnmatchedPolicy) -> Self {
        OrderParser { table, policy }
    }

    /// Creates a parser over the built-in vocabulary with strict dropping.
    pub fn builtin() -> Self {
        OrderParser::new(KeywordTable::builtin(), UnmatchedPolicy::Drop)
    }

    /// The keyword table this parser matches against.
    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Parses a bulk-order text into quantity-aggregated lines.
    ///
    /// Lines resolving to the same service key merge: quantities are
    /// summed and raw text is joined with `", "`. Distinct keys keep the
    /// order their first match was encountered in the input.
    ///
    /// Never fails: unmatched or empty lines simply contribute nothing.
    /// Once the output holds [`crate::MAX_ORDER_LINES`] distinct lines,
    /// further lines for NEW keys are dropped; lines merging into an
    /// existing key still aggregate.
    pub fn parse(&self, input: &str) -> Vec<ParsedOrderLine> {
        let mut items: Vec<ParsedOrderLine> = Vec::new();

        for line in LINE_SPLIT.split(input).map(str::trim).filter(|l| !l.is_empty()) {
            let Some(parsed) = self.parse_line(line) else {
                continue;
            };

            if let Some(existing) = items.iter_mut().find(|i| i.service_key == parsed.service_key) {
                existing.quantity = existing.quantity.saturating_add(parsed.quantity);
                existing.text.push_str(", ");
                existing.text.push_str(&parsed.text);
            } else if items.len() < MAX_ORDER_LINES {
                items.push(parsed);
            }
        }

        items
    }

    /// Parses one candidate line into a (service, quantity) pair.
    fn parse_line(&self, line: &str) -> Option<ParsedOrderLine> {
        let (quantity, remainder) = extract_quantity(line);

        // An explicit zero ("0 shirts") is a request for nothing; output
        // lines always carry a positive quantity.
        if quantity <= 0 {
            return None;
        }

        // Typed quantities clamp to the per-line cap. "5000 shirts" is a
        // typo or an attack, never a real walk-in order; best-effort means
        // the line survives at the cap instead of erroring out.
        let quantity = quantity.min(MAX_LINE_QUANTITY);

        let service_key = match self.table.best_match(&remainder) {
            Some(key) => key.to_string(),
            None => match &self.policy {
                UnmatchedPolicy::Drop => return None,
                UnmatchedPolicy::DefaultTo(key) => key.clone(),
            },
        };

        Some(ParsedOrderLine {
            service_key,
            quantity,
            text: line.to_string(),
        })
    }
}

/// Parses a bulk order with the built-in vocabulary and strict dropping.
///
/// ## Example
/// ```rust
/// use washday_core::parser::parse_bulk_order;
///
/// let lines = parse_bulk_order("10 shirts, 5 trousers and 2 suits");
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[0].service_key, "shirt_polo");
/// assert_eq!(lines[0].quantity, 10);
/// ```
pub fn parse_bulk_order(input: &str) -> Vec<ParsedOrderLine> {
    OrderParser::builtin().parse(input)
}

// =============================================================================
// Quantity Extraction
// =============================================================================

/// Extracts a leading quantity and the lowercased remainder phrase.
///
/// Recognizes "10 shirts" / "10x shirts" / "10 * shirts" and the English
/// words one-ten. Anything else - including integers too large for i64 -
/// falls back to quantity 1 with the whole line as the remainder.
fn extract_quantity(line: &str) -> (i64, String) {
    if let Some(caps) = QTY_NUMERIC.captures(line) {
        // Overflowing digits fall through to the 1/whole-line fallback
        if let Ok(qty) = caps[1].parse::<i64>() {
            return (qty, caps[2].trim().to_lowercase());
        }
    }

    if let Some(caps) = QTY_WORD.captures(line) {
        let qty = word_to_number(&caps[1].to_lowercase());
        return (qty, caps[2].trim().to_lowercase());
    }

    (1, line.trim().to_lowercase())
}

/// English quantity words 1-10, as the walk-in portal accepts them.
fn word_to_number(word: &str) -> i64 {
    match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => 1,
    }
}

// =============================================================================
// Display Names
// =============================================================================

/// Display name for a built-in service key; unknown keys echo back.
///
/// The catalog is the real source of display names - this covers contexts
/// (logs, fallback rendering) where only the key is at hand.
pub fn service_display_name(key: &str) -> &str {
    match key {
        "shirt_polo" => "Shirt / Polo",
        "shirt_long" => "Shirt (Long Sleeve)",
        "trouser" => "Trousers / Jeans",
        "native_senator" => "Native (Senator/2pc)",
        "agbada" => "Agbada (3-Piece)",
        "bedsheet_double" => "Bedsheet (Double)",
        "suit_2pc" => "Suit (2-Piece)",
        "blazer" => "Blazer / Jacket",
        "kaftan" => "Kaftan / Jalabiya",
        "evening_gown" => "Evening Gown",
        "tie_scarf" => "Tie / Scarf",
        "wedding_gown" => "Wedding Gown (Basic)",
        "duvet_large" => "Duvet (Large)",
        "rug_cleaning" => "Rug Cleaning",
        other => other,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
