//! Signal catalog: the lexical evidence a message is scored against
//!
//! The catalog is an immutable value built once and handed to the
//! [`SignalMatcher`](crate::SignalMatcher). Pattern signals come first, in
//! insertion order, followed by airline names.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use regex_syntax::hir::{
    Class, ClassBytes, ClassBytesRange, ClassUnicode, ClassUnicodeRange, Hir, HirKind,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DetectError, Result};

/// Flight-number shaped token, e.g. `AA123`
pub const FLIGHT_NUMBER_SIGNAL: &str = r"\b[A-Z]{2}\d{3,4}\b";

/// Six-letter booking reference, e.g. `ABCDEF`
pub const BOOKING_REFERENCE_SIGNAL: &str = r"\b[A-Z]{6}\b";

const PHRASE_PATTERNS: [&str; 11] = [
    r"flight confirmation",
    r"booking confirmation",
    r"flight itinerary",
    r"e-ticket",
    r"boarding pass",
    r"flight \w+\d+",
    r"confirmation number",
    r"reservation number",
    r"booking reference",
    FLIGHT_NUMBER_SIGNAL,
    BOOKING_REFERENCE_SIGNAL,
];

const AIRLINE_NAMES: [&str; 25] = [
    "delta",
    "american airlines",
    "united",
    "southwest",
    "jetblue",
    "alaska airlines",
    "frontier",
    "spirit",
    "british airways",
    "lufthansa",
    "air france",
    "emirates",
    "qatar airways",
    "cathay pacific",
    "singapore airlines",
    "air canada",
    "klm",
    "turkish airlines",
    "airasia",
    "ryanair",
    "easyjet",
    "virgin atlantic",
    "hawaiian airlines",
    "eva air",
    "etihad",
];

static BUILTIN: LazyLock<SignalCatalog> = LazyLock::new(|| {
    SignalCatalog::from_config(&CatalogConfig::default()).expect("built-in catalog compiles")
});

static CASE_AWARE: LazyLock<SignalCatalog> = LazyLock::new(|| {
    SignalCatalog::from_config(&CatalogConfig::case_aware()).expect("built-in catalog compiles")
});

/// Which form of the text a pattern is applied to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScanCase {
    /// Lower-cased subject and body
    #[default]
    Folded,
    /// Subject and body as received
    Original,
}

/// One pattern entry of a [`CatalogConfig`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternConfig {
    pub pattern: String,
    #[serde(default)]
    pub case: ScanCase,
}

impl PatternConfig {
    pub fn folded(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case: ScanCase::Folded,
        }
    }

    pub fn original(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case: ScanCase::Original,
        }
    }
}

/// Uncompiled catalog, as read from configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Phrase and structure patterns, evaluated first
    pub patterns: Vec<PatternConfig>,

    /// Airline names, matched as substrings
    pub airlines: Vec<String>,
}

impl Default for CatalogConfig {
    /// The built-in catalog. Every pattern scans folded text, which leaves
    /// the two uppercase-shape patterns unable to match anything.
    fn default() -> Self {
        Self {
            patterns: PHRASE_PATTERNS
                .iter()
                .map(|p| PatternConfig::folded(*p))
                .collect(),
            airlines: AIRLINE_NAMES.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    /// The built-in catalog with the flight-number and booking-reference
    /// shapes applied to the original-case text, so they can fire.
    #[must_use]
    pub fn case_aware() -> Self {
        let mut config = Self::default();
        for entry in &mut config.patterns {
            if entry.pattern == FLIGHT_NUMBER_SIGNAL || entry.pattern == BOOKING_REFERENCE_SIGNAL {
                entry.case = ScanCase::Original;
            }
        }
        config
    }
}

/// A compiled pattern signal
#[derive(Debug, Clone)]
pub struct PatternSignal {
    id: String,
    regex: Regex,
    case: ScanCase,
    folded_unmatchable: bool,
}

impl PatternSignal {
    /// The pattern source, used as the signal identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn case(&self) -> ScanCase {
        self.case
    }

    /// True if the pattern matches anywhere in the subject or body
    #[must_use]
    pub fn is_present(&self, folded: (&str, &str), original: (&str, &str)) -> bool {
        let (subject, body) = match self.case {
            ScanCase::Folded => folded,
            ScanCase::Original => original,
        };
        self.regex.is_match(subject) || self.regex.is_match(body)
    }

    /// True for a folded-case pattern that cannot match text without ASCII
    /// uppercase letters, such as `\b[A-Z]{6}\b` or the literal `PNR`.
    #[must_use]
    pub fn is_case_inert(&self) -> bool {
        self.case == ScanCase::Folded && self.folded_unmatchable
    }
}

/// True if `pattern` cannot match any text free of ASCII uppercase.
/// Patterns that fail to parse count as matchable.
fn needs_ascii_uppercase(pattern: &str) -> bool {
    regex_syntax::Parser::new()
        .parse(pattern)
        .is_ok_and(|hir| !matches_without_uppercase(&hir))
}

/// Whether some input without `A-Z` can satisfy `hir`. Case-insensitive
/// groups have already been expanded into classes by the parser, so
/// `(?i)[A-Z]` keeps its lowercase half here. Look-around is assumed
/// satisfiable.
fn matches_without_uppercase(hir: &Hir) -> bool {
    match hir.kind() {
        HirKind::Empty | HirKind::Look(_) => true,
        HirKind::Literal(literal) => !literal.0.iter().any(u8::is_ascii_uppercase),
        HirKind::Class(Class::Unicode(class)) => {
            let mut class = class.clone();
            class.difference(&ClassUnicode::new([ClassUnicodeRange::new('A', 'Z')]));
            !class.ranges().is_empty()
        }
        HirKind::Class(Class::Bytes(class)) => {
            let mut class = class.clone();
            class.difference(&ClassBytes::new([ClassBytesRange::new(b'A', b'Z')]));
            !class.ranges().is_empty()
        }
        HirKind::Repetition(rep) => rep.min == 0 || matches_without_uppercase(&rep.sub),
        HirKind::Capture(cap) => matches_without_uppercase(&cap.sub),
        HirKind::Concat(subs) => subs.iter().all(matches_without_uppercase),
        HirKind::Alternation(subs) => subs.iter().any(matches_without_uppercase),
    }
}

/// Immutable, compiled signal catalog
#[derive(Debug, Clone)]
pub struct SignalCatalog {
    patterns: Vec<PatternSignal>,
    airlines: Vec<String>,
}

impl Default for SignalCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SignalCatalog {
    /// The fixed built-in catalog with source-compatible case handling
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// The built-in catalog with the uppercase shapes scanning original case
    #[must_use]
    pub fn case_aware() -> Self {
        CASE_AWARE.clone()
    }

    /// Compile a catalog, rejecting empty entries, bad patterns and
    /// duplicate identifiers
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut seen = HashSet::new();

        let mut patterns = Vec::with_capacity(config.patterns.len());
        for entry in &config.patterns {
            if entry.pattern.is_empty() {
                return Err(DetectError::InvalidConfig("empty signal pattern".into()));
            }
            if !seen.insert(entry.pattern.clone()) {
                return Err(DetectError::DuplicateSignal(entry.pattern.clone()));
            }

            let regex = Regex::new(&entry.pattern).map_err(|source| DetectError::InvalidPattern {
                pattern: entry.pattern.clone(),
                source,
            })?;

            let signal = PatternSignal {
                id: entry.pattern.clone(),
                regex,
                case: entry.case,
                folded_unmatchable: needs_ascii_uppercase(&entry.pattern),
            };
            if signal.is_case_inert() {
                debug!("Signal {} scans folded text and cannot match", signal.id);
            }
            patterns.push(signal);
        }

        let mut airlines = Vec::with_capacity(config.airlines.len());
        for name in &config.airlines {
            let name = name.to_ascii_lowercase();
            if name.is_empty() {
                return Err(DetectError::InvalidConfig("empty airline name".into()));
            }
            if !seen.insert(name.clone()) {
                return Err(DetectError::DuplicateSignal(name));
            }
            airlines.push(name);
        }

        Ok(Self { patterns, airlines })
    }

    #[must_use]
    pub fn patterns(&self) -> &[PatternSignal] {
        &self.patterns
    }

    /// Airline names, already lower-cased
    #[must_use]
    pub fn airlines(&self) -> &[String] {
        &self.airlines
    }

    /// All signal identifiers in evaluation order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .map(PatternSignal::id)
            .chain(self.airlines.iter().map(String::as_str))
    }

    /// Identifiers of patterns that cannot match under their case setting
    pub fn inert_patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .filter(|p| p.is_case_inert())
            .map(PatternSignal::id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len() + self.airlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.airlines.is_empty()
    }
}
