//! # Tokenizer Configuration
//!
//! [`TokenizerConfig`] is the fully resolved configuration consumed by the
//! tokenizer, trainer, and codecs. It is plain serde data; loading it from
//! a file is left to the caller.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{MCResult, MorphchipperError},
    segmentation::TextSplitter,
    segmentation::text_splitter::DEFAULT_WORD_PATTERN,
    tokenizer::AffixMergePolicy,
    types::TokenType,
    vocab::{
        SpecialTokensConfig,
        validators::{try_min_freq, try_vocab_size},
    },
};

/// The default target vocabulary size.
pub const DEFAULT_VOCAB_SIZE: usize = 50_000;

/// The default minimum admission frequency.
pub const DEFAULT_MIN_FREQ: usize = 2;

/// The default affix marker.
pub const DEFAULT_AFFIX_MARKER: &str = "#";

/// Suffix merge flags; see [`AffixMergePolicy::from_suffix_config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixConfig {
    /// Keep only roots.
    pub root_only: bool,

    /// Merge all affixes into one token.
    pub combined: bool,

    /// Keep only the last affix.
    pub last_only: bool,
}

/// Which tokenizer engine to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Words are tokens.
    Whitespace,

    /// Words are segmented into root and affix tokens.
    #[default]
    Morphological,
}

/// Where the trained vocabulary is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPathConfig {
    /// The vocabulary file path.
    pub path: Option<PathBuf>,

    /// Replace an existing file on save.
    pub overwrite: bool,
}

/// Resolved tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Upper bound on the vocabulary size, including special tokens.
    pub vocab_size: usize,

    /// Minimum corpus frequency for a token to be admitted.
    pub min_freq: usize,

    /// The reserved special tokens.
    pub special_tokens: SpecialTokensConfig,

    /// The prefix marking affix tokens.
    pub token_affix_marker: String,

    /// Affix merge flags.
    pub suffixes: SuffixConfig,

    /// The tokenizer engine.
    pub engine: EngineKind,

    /// Truncate roots to at most this many characters; zero disables.
    pub root_max_len: Option<usize>,

    /// Regex whose matches are replaced by ``" '"`` before tokenizing.
    pub escape_pattern: Option<String>,

    /// Regex whose matches are the words of a sentence.
    pub word_pattern: String,

    /// Vocabulary persistence.
    pub model: ModelPathConfig,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: DEFAULT_VOCAB_SIZE,
            min_freq: DEFAULT_MIN_FREQ,
            special_tokens: SpecialTokensConfig::default(),
            token_affix_marker: DEFAULT_AFFIX_MARKER.to_string(),
            suffixes: SuffixConfig::default(),
            engine: EngineKind::default(),
            root_max_len: None,
            escape_pattern: None,
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
            model: ModelPathConfig::default(),
        }
    }
}

impl TokenizerConfig {
    /// Set the target vocabulary size.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Set the minimum admission frequency.
    pub fn with_min_freq(
        self,
        min_freq: usize,
    ) -> Self {
        Self { min_freq, ..self }
    }

    /// Replace the special tokens.
    pub fn with_special_tokens(
        self,
        special_tokens: SpecialTokensConfig,
    ) -> Self {
        Self {
            special_tokens,
            ..self
        }
    }

    /// Set the affix marker.
    pub fn with_affix_marker<S: Into<String>>(
        self,
        marker: S,
    ) -> Self {
        Self {
            token_affix_marker: marker.into(),
            ..self
        }
    }

    /// Set the suffix merge flags.
    pub fn with_suffixes(
        self,
        suffixes: SuffixConfig,
    ) -> Self {
        Self { suffixes, ..self }
    }

    /// Set the suffix merge flags from a policy.
    pub fn with_policy(
        self,
        policy: AffixMergePolicy,
    ) -> Self {
        let suffixes = SuffixConfig {
            root_only: policy == AffixMergePolicy::RootOnly,
            combined: policy == AffixMergePolicy::Combined,
            last_only: policy == AffixMergePolicy::LastOnly,
        };
        self.with_suffixes(suffixes)
    }

    /// Select the tokenizer engine.
    pub fn with_engine(
        self,
        engine: EngineKind,
    ) -> Self {
        Self { engine, ..self }
    }

    /// Set the root truncation length.
    pub fn with_root_max_len(
        self,
        root_max_len: Option<usize>,
    ) -> Self {
        Self {
            root_max_len,
            ..self
        }
    }

    /// Set the escape normalization pattern.
    pub fn with_escape_pattern<S: Into<String>>(
        self,
        pattern: Option<S>,
    ) -> Self {
        Self {
            escape_pattern: pattern.map(Into::into),
            ..self
        }
    }

    /// Set the word split pattern.
    pub fn with_word_pattern<S: Into<String>>(
        self,
        pattern: S,
    ) -> Self {
        Self {
            word_pattern: pattern.into(),
            ..self
        }
    }

    /// Set the vocabulary persistence path.
    pub fn with_model_path<P: Into<PathBuf>>(
        self,
        path: P,
        overwrite: bool,
    ) -> Self {
        Self {
            model: ModelPathConfig {
                path: Some(path.into()),
                overwrite,
            },
            ..self
        }
    }

    /// The affix merge policy selected by the suffix flags.
    pub fn merge_policy(&self) -> MCResult<AffixMergePolicy> {
        AffixMergePolicy::from_suffix_config(&self.suffixes)
    }

    /// The effective root truncation length.
    pub fn effective_root_max_len(&self) -> Option<usize> {
        self.root_max_len.filter(|&n| n > 0)
    }

    /// Build the text splitter described by the patterns.
    pub fn text_splitter(&self) -> MCResult<TextSplitter> {
        TextSplitter::new(&self.word_pattern, self.escape_pattern.as_deref())
    }

    /// Check the configuration for token type `T`.
    ///
    /// ## Returns
    /// The first configuration error found:
    /// special token conflicts, a vocab size that cannot hold the specials
    /// or overflows `T`, a zero `min_freq`, an empty affix marker,
    /// conflicting merge flags, or a pattern that does not compile.
    pub fn validate<T: TokenType>(&self) -> MCResult<()> {
        let specials = self.special_tokens.build::<T>()?;
        try_vocab_size::<T>(self.vocab_size, specials.len())?;
        try_min_freq(self.min_freq)?;
        if self.token_affix_marker.is_empty() {
            return Err(MorphchipperError::InvalidAffixMarker);
        }
        self.merge_policy()?;
        self.text_splitter()?;
        Ok(())
    }
}
