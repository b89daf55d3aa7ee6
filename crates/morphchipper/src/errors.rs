//! # Error Types

use std::path::PathBuf;

/// Errors from morphchipper operations.
#[derive(Debug, thiserror::Error)]
pub enum MorphchipperError {
    /// An ID does not fit in the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The size (or extended ID) that exceeded the capacity.
        size: usize,
    },

    /// The target vocab size cannot hold the reserved special tokens.
    #[error("vocab size ({size}) must be >= the number of special tokens ({specials})")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,

        /// The number of special tokens.
        specials: usize,
    },

    /// The minimum admission frequency must be positive.
    #[error("min_freq must be >= 1")]
    InvalidMinFreq,

    /// Special token configuration is inconsistent.
    #[error("special token conflict: {0}")]
    SpecialTokenConflict(String),

    /// Affix merge flags select more than one merge mode.
    #[error("merge policy conflict: {0}")]
    MergePolicyConflict(String),

    /// The affix marker must be a non-empty string.
    #[error("token affix marker must not be empty")]
    InvalidAffixMarker,

    /// A morphological tokenizer was requested without a segmenter.
    #[error("morphological tokenizer requires a morpheme segmenter")]
    MissingSegmenter,

    /// Token value out of range for the vocabulary.
    #[error("token out of range")]
    TokenOutOfRange,

    /// A model file already exists and overwrite was not requested.
    #[error("model file already exists: {0:?}")]
    ModelExists(PathBuf),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, lexicon line, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(String),
}

impl From<regex::Error> for MorphchipperError {
    fn from(err: regex::Error) -> Self {
        MorphchipperError::Regex(err.to_string())
    }
}

/// Result type for morphchipper operations.
pub type MCResult<T> = core::result::Result<T, MorphchipperError>;
