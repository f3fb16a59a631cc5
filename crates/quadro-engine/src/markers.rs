//! Marker lexicon and text normalization
//!
//! The header, key-column, and classifier heuristics recognize columns by
//! vocabulary, not position. That vocabulary lives here as an explicit table
//! mapping a semantic marker to its accepted substrings, so a new locale or
//! sheet vocabulary is added as data, never as a code change.
//!
//! All matching happens on *folded* text: accents stripped, lowercased,
//! inner whitespace collapsed. The default lexicon carries the Brazilian
//! Portuguese vocabulary of the training-validity sheets this engine grew
//! up on.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Semantic roles a header cell or column name can signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Employer / company column
    Company,
    /// Person's full name column
    FullName,
    /// Generic name column
    Name,
    /// Tax-id column (numeric-looking, but not numeric data)
    TaxId,
    /// Role / function column
    Role,
    /// Sub-label token hinting a date column ("data", "valid", "realiza")
    DateToken,
    /// Expiration / renewal deadline column
    Validity,
    /// "Performed on" column (an event date, not a deadline)
    Performed,
}

static PT_BR: Lazy<MarkerLexicon> = Lazy::new(|| {
    let mut lex = MarkerLexicon::empty();
    lex.extend(Marker::Company, ["empresa"]);
    lex.extend(Marker::FullName, ["nome completo"]);
    lex.extend(Marker::Name, ["nome"]);
    lex.extend(Marker::TaxId, ["cpf"]);
    lex.extend(Marker::Role, ["funcao"]);
    lex.extend(Marker::DateToken, ["data", "valid", "realiza"]);
    lex.extend(Marker::Validity, ["valid", "venc", "aso"]);
    lex.extend(Marker::Performed, ["realiza"]);
    lex
});

/// Configuration table mapping semantic markers to accepted substrings
///
/// Tokens are stored folded (see [`normalize_for_match`]); callers fold
/// their text once and query with either exact or substring semantics.
#[derive(Debug, Clone)]
pub struct MarkerLexicon {
    entries: HashMap<Marker, Vec<String>>,
}

impl MarkerLexicon {
    /// Create a lexicon with no vocabulary at all
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The built-in Brazilian Portuguese lexicon
    pub fn pt_br() -> Self {
        PT_BR.clone()
    }

    /// Add accepted substrings for a marker (folded on the way in)
    pub fn extend<I, S>(&mut self, marker: Marker, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.entries.entry(marker).or_default();
        for token in tokens {
            let folded = normalize_for_match(token.as_ref());
            if !folded.is_empty() && !entry.contains(&folded) {
                entry.push(folded);
            }
        }
    }

    /// The accepted tokens for a marker
    pub fn tokens(&self, marker: Marker) -> &[String] {
        self.entries.get(&marker).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether folded text equals any of the marker's tokens
    pub fn text_is(&self, marker: Marker, folded: &str) -> bool {
        self.tokens(marker).iter().any(|t| t == folded)
    }

    /// Check whether folded text contains any of the marker's tokens
    pub fn text_contains(&self, marker: Marker, folded: &str) -> bool {
        self.tokens(marker).iter().any(|t| folded.contains(t.as_str()))
    }

    /// Check whether any of the marker's tokens appears verbatim in a set
    /// of folded cell texts
    pub fn any_token_in(&self, marker: Marker, cells: &HashSet<String>) -> bool {
        self.tokens(marker).iter().any(|t| cells.contains(t))
    }
}

impl Default for MarkerLexicon {
    fn default() -> Self {
        Self::pt_br()
    }
}

/// Collapse internal whitespace and trim, preserving case and accents
///
/// This is the display normalization used for column names.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold text for matching: trim, collapse whitespace, lowercase, and strip
/// the Latin diacritics that occur in the supported header vocabularies
pub fn normalize_for_match(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}
