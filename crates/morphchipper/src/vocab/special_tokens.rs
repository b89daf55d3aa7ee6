//! # Reserved Special Tokens
//!
//! Special tokens are configured explicitly, rather than read from shared
//! process state; and are registered into a [`crate::vocab::Vocabulary`]
//! before any ordinary word.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{MCResult, MorphchipperError},
    types::{MCHashSet, TokenType, try_token_from_usize},
};

/// The default padding token text.
pub const DEFAULT_PAD: &str = "[PAD]";
/// The default unknown token text.
pub const DEFAULT_UNK: &str = "[UNK]";
/// The default start-of-sequence token text.
pub const DEFAULT_SOS: &str = "[SOS]";
/// The default end-of-sequence token text.
pub const DEFAULT_EOS: &str = "[EOS]";

/// A single `(text, id)` special token entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokenEntry {
    /// The token text.
    pub text: String,

    /// The reserved ID.
    pub id: u64,
}

impl SpecialTokenEntry {
    /// Create a new entry.
    pub fn new<S: Into<String>>(
        text: S,
        id: u64,
    ) -> Self {
        Self {
            text: text.into(),
            id,
        }
    }
}

/// Configuration of the reserved special tokens.
///
/// The four role tokens are mandatory; `extra` may carry additional
/// reserved entries (for example, separator or mask tokens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokensConfig {
    /// The padding token.
    pub pad: SpecialTokenEntry,

    /// The unknown-word token.
    pub unknown: SpecialTokenEntry,

    /// The start-of-sequence token.
    pub start: SpecialTokenEntry,

    /// The end-of-sequence token.
    pub end: SpecialTokenEntry,

    /// Additional reserved tokens.
    #[serde(default)]
    pub extra: Vec<SpecialTokenEntry>,
}

impl Default for SpecialTokensConfig {
    fn default() -> Self {
        Self {
            pad: SpecialTokenEntry::new(DEFAULT_PAD, 0),
            unknown: SpecialTokenEntry::new(DEFAULT_UNK, 1),
            start: SpecialTokenEntry::new(DEFAULT_SOS, 2),
            end: SpecialTokenEntry::new(DEFAULT_EOS, 3),
            extra: Vec::new(),
        }
    }
}

impl SpecialTokensConfig {
    /// Add an extra reserved token.
    ///
    /// ## Arguments
    /// * `text` - The token text.
    /// * `id` - The reserved ID.
    ///
    /// ## Returns
    /// The updated `SpecialTokensConfig` instance.
    pub fn with_extra<S: Into<String>>(
        mut self,
        text: S,
        id: u64,
    ) -> Self {
        self.extra.push(SpecialTokenEntry::new(text, id));
        self
    }

    /// Iterate over all entries; roles first, then extras.
    pub fn entries(&self) -> impl Iterator<Item = &SpecialTokenEntry> {
        [&self.pad, &self.unknown, &self.start, &self.end]
            .into_iter()
            .chain(self.extra.iter())
    }

    /// The number of reserved tokens.
    pub fn len(&self) -> usize {
        4 + self.extra.len()
    }

    /// Always false; the role tokens are mandatory.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Build the typed [`SpecialTokens`] for a token type.
    ///
    /// ## Returns
    /// `SpecialTokenConflict` if two entries share a text or an ID;
    /// `VocabSizeOverflow` if an ID does not fit in `T`.
    pub fn build<T: TokenType>(&self) -> MCResult<SpecialTokens<T>> {
        let mut entries: Vec<(String, T)> = Vec::with_capacity(self.len());
        for entry in self.entries() {
            let id = usize::try_from(entry.id)
                .map_err(|_| MorphchipperError::VocabSizeOverflow { size: usize::MAX })?;
            entries.push((entry.text.clone(), try_token_from_usize(id)?));
        }
        SpecialTokens::from_entries(entries)
    }
}

/// The typed set of reserved special tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialTokens<T: TokenType> {
    /// Entries in registration order; the four roles come first.
    entries: Vec<(String, T)>,

    /// The set of reserved IDs.
    reserved: MCHashSet<T>,
}

impl<T: TokenType> Default for SpecialTokens<T> {
    fn default() -> Self {
        // The default config is conflict free and fits every token type.
        SpecialTokensConfig::default()
            .build()
            .unwrap_or_else(|_| unreachable!("default special tokens are valid"))
    }
}

impl<T: TokenType> SpecialTokens<T> {
    /// Build from `[pad, unknown, start, end, extra...]` entries.
    ///
    /// ## Arguments
    /// * `entries` - The role entries, in role order, followed by any extras.
    ///
    /// ## Returns
    /// A `SpecialTokens`, or `SpecialTokenConflict` on duplicates or
    /// fewer than four entries.
    pub fn from_entries(entries: Vec<(String, T)>) -> MCResult<Self> {
        if entries.len() < 4 {
            return Err(MorphchipperError::SpecialTokenConflict(format!(
                "expected pad, unknown, start and end tokens; found {}",
                entries.len()
            )));
        }

        let mut reserved: MCHashSet<T> = MCHashSet::default();
        let mut texts: MCHashSet<&str> = MCHashSet::default();
        for (text, id) in &entries {
            if text.is_empty() {
                return Err(MorphchipperError::SpecialTokenConflict(
                    "special token text must not be empty".to_string(),
                ));
            }
            if !texts.insert(text.as_str()) {
                return Err(MorphchipperError::SpecialTokenConflict(format!(
                    "duplicate special token text {text:?}"
                )));
            }
            if !reserved.insert(*id) {
                return Err(MorphchipperError::SpecialTokenConflict(format!(
                    "duplicate special token id {id}"
                )));
            }
        }

        Ok(Self { entries, reserved })
    }

    /// The number of reserved tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no reserved tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(text, id)` entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.entries.iter().map(|(text, id)| (text.as_str(), *id))
    }

    /// Is this ID reserved?
    pub fn is_reserved(
        &self,
        id: T,
    ) -> bool {
        self.reserved.contains(&id)
    }

    /// Is this text a special token?
    pub fn contains_text(
        &self,
        text: &str,
    ) -> bool {
        self.entries.iter().any(|(t, _)| t == text)
    }

    /// The padding token `(text, id)`.
    pub fn pad(&self) -> (&str, T) {
        self.role(0)
    }

    /// The unknown-word token `(text, id)`.
    pub fn unknown(&self) -> (&str, T) {
        self.role(1)
    }

    /// The start-of-sequence token `(text, id)`.
    pub fn start(&self) -> (&str, T) {
        self.role(2)
    }

    /// The end-of-sequence token `(text, id)`.
    pub fn end(&self) -> (&str, T) {
        self.role(3)
    }

    fn role(
        &self,
        idx: usize,
    ) -> (&str, T) {
        let (text, id) = &self.entries[idx];
        (text.as_str(), *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_specials() {
        type T = u32;
        let specials: SpecialTokens<T> = SpecialTokens::default();

        assert_eq!(specials.len(), 4);
        assert_eq!(specials.pad(), (DEFAULT_PAD, 0));
        assert_eq!(specials.unknown(), (DEFAULT_UNK, 1));
        assert_eq!(specials.start(), (DEFAULT_SOS, 2));
        assert_eq!(specials.end(), (DEFAULT_EOS, 3));

        assert!(specials.is_reserved(3));
        assert!(!specials.is_reserved(4));
        assert!(specials.contains_text("[UNK]"));
    }

    #[test]
    fn test_extra_specials() {
        let config = SpecialTokensConfig::default().with_extra("[MASK]", 9);
        assert_eq!(config.len(), 5);

        let specials: SpecialTokens<u16> = config.build().unwrap();
        assert!(specials.is_reserved(9));
        assert_eq!(
            specials.iter().map(|(_, id)| id).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 9]
        );
    }

    #[test]
    fn test_conflicts() {
        let mut config = SpecialTokensConfig::default();
        config.end.id = 1;
        assert!(matches!(
            config.build::<u32>(),
            Err(MorphchipperError::SpecialTokenConflict(_))
        ));

        let mut config = SpecialTokensConfig::default();
        config.start.text = DEFAULT_PAD.to_string();
        assert!(matches!(
            config.build::<u32>(),
            Err(MorphchipperError::SpecialTokenConflict(_))
        ));

        let config = SpecialTokensConfig::default().with_extra("[BIG]", 300);
        assert!(matches!(
            config.build::<u8>(),
            Err(MorphchipperError::VocabSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = SpecialTokensConfig::default().with_extra("[SEP]", 7);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SpecialTokensConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
