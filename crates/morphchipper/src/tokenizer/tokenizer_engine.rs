//! # Tokenizer Engine
//!
//! The closed set of tokenizer variants, selected once from configuration.

use std::sync::Arc;

use crate::{
    errors::{MCResult, MorphchipperError},
    segmentation::{MorphemeSegmenter, TextSplitter},
    tokenizer::{EngineKind, MorphTokenizer, TextTokenizer, TokenizerConfig},
};

/// A configured tokenizer.
#[derive(Debug, Clone)]
pub enum TokenizerEngine {
    /// Words are tokens.
    Whitespace(TextSplitter),

    /// Words are segmented into root and affix tokens.
    Morphological(MorphTokenizer),
}

impl TokenizerEngine {
    /// Build the engine selected by `config.engine`.
    ///
    /// ## Arguments
    /// * `config` - The resolved configuration.
    /// * `segmenter` - The segmenter; required by the morphological engine,
    ///   ignored by the whitespace engine.
    ///
    /// ## Returns
    /// The engine; `MissingSegmenter` if a morphological engine has no
    /// segmenter, or the merge policy / pattern errors of the config.
    pub fn from_config(
        config: &TokenizerConfig,
        segmenter: Option<Arc<dyn MorphemeSegmenter>>,
    ) -> MCResult<Self> {
        let splitter = config.text_splitter()?;
        match config.engine {
            EngineKind::Whitespace => Ok(Self::Whitespace(splitter)),
            EngineKind::Morphological => {
                if config.token_affix_marker.is_empty() {
                    return Err(MorphchipperError::InvalidAffixMarker);
                }
                let segmenter = segmenter.ok_or(MorphchipperError::MissingSegmenter)?;
                Ok(Self::Morphological(
                    MorphTokenizer::new(segmenter)
                        .with_splitter(splitter)
                        .with_policy(config.merge_policy()?)
                        .with_marker(config.token_affix_marker.clone())
                        .with_root_max_len(config.effective_root_max_len()),
                ))
            }
        }
    }

    /// The engine kind.
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Whitespace(_) => EngineKind::Whitespace,
            Self::Morphological(_) => EngineKind::Morphological,
        }
    }
}

impl TextTokenizer for TokenizerEngine {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        match self {
            Self::Whitespace(splitter) => splitter.tokenize(text),
            Self::Morphological(tok) => tok.tokenize(text),
        }
    }

    fn affix_marker(&self) -> Option<&str> {
        match self {
            Self::Whitespace(splitter) => splitter.affix_marker(),
            Self::Morphological(tok) => tok.affix_marker(),
        }
    }
}
