use std::{path::PathBuf, sync::Arc};

use morphchipper::{
    Vocabulary,
    segmentation::{LexiconSegmenter, MorphemeSegmenter},
    tokenizer::{EngineKind, TokenizerConfig, TokenizerEngine},
    vocab::io::load_vocab_path,
};

use crate::{T, input_output::open_path_reader};

/// Tokenizer configuration argument group.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// JSON tokenizer config file; defaults are used when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lexicon TSV (``word<TAB>root+affix...``) for the morphological engine.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Use the whitespace engine, regardless of the config file.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    whitespace: bool,
}

impl ConfigArgs {
    /// Load the config file (if any) and apply overrides.
    pub fn load_config(&self) -> Result<TokenizerConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                log::debug!("config: {}", path.display());
                serde_json::from_reader(open_path_reader(path)?)?
            }
            None => TokenizerConfig::default(),
        };
        if self.whitespace {
            config = config.with_engine(EngineKind::Whitespace);
        }
        Ok(config)
    }

    /// Load the segmenter named by `--lexicon`.
    pub fn load_segmenter(
        &self,
    ) -> Result<Option<Arc<dyn MorphemeSegmenter>>, Box<dyn std::error::Error>> {
        Ok(match &self.lexicon {
            Some(path) => {
                let lexicon: Arc<dyn MorphemeSegmenter> =
                    Arc::new(LexiconSegmenter::load_path(path)?);
                Some(lexicon)
            }
            None => None,
        })
    }

    /// Build the tokenizer engine for a resolved config.
    pub fn build_engine(
        &self,
        config: &TokenizerConfig,
    ) -> Result<TokenizerEngine, Box<dyn std::error::Error>> {
        config.validate::<T>()?;
        let segmenter = if config.engine == EngineKind::Morphological {
            self.load_segmenter()?
        } else {
            None
        };
        Ok(TokenizerEngine::from_config(config, segmenter)?)
    }
}

/// Model path argument group.
#[derive(clap::Args, Debug)]
pub struct ModelArgs {
    /// Vocabulary file; defaults to the config's `model.path`.
    #[arg(long)]
    model: Option<PathBuf>,
}

impl ModelArgs {
    /// Load the vocabulary.
    pub fn load_vocab(
        &self,
        config: &TokenizerConfig,
    ) -> Result<Vocabulary<T>, Box<dyn std::error::Error>> {
        let path = self
            .model
            .clone()
            .or_else(|| config.model.path.clone())
            .ok_or("no model path; pass --model or set model.path")?;
        log::info!("model: {}", path.display());
        Ok(load_vocab_path(&path, &config.special_tokens)?)
    }
}
