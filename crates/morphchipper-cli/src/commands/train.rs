use std::path::PathBuf;

use morphchipper::{
    Vocabulary,
    training::VocabTrainerOptions,
    vocab::io::{save_vocab_path, write_vocab},
};

use crate::{LogArgs, T, config_args::ConfigArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input files.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Max vocab size, including special tokens.
    #[arg(long)]
    vocab_size: Option<usize>,

    /// Minimum token frequency.
    #[arg(long)]
    min_freq: Option<usize>,

    /// Vocabulary output file; "-" writes to stdout.
    ///
    /// Defaults to the config's `model.path`, then stdout.
    #[arg(long)]
    output: Option<String>,

    /// Replace an existing vocabulary file.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    overwrite: bool,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;
        self.execute()
    }

    /// Run the train command without installing a logger.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut config = self.config.load_config()?;
        if let Some(vocab_size) = self.vocab_size {
            config = config.with_vocab_size(vocab_size);
        }
        if let Some(min_freq) = self.min_freq {
            config = config.with_min_freq(min_freq);
        }
        let engine = self.config.build_engine(&config)?;
        log::info!("engine: {:?}", engine.kind());

        let mut trainer = VocabTrainerOptions::from_config(&config).init(engine);

        log::info!("Reading shards:");
        for (idx, path) in self.files.iter().enumerate() {
            let lines = trainer.update_from_path(path)?;
            log::info!("{idx}: {path} ({lines} lines)");
        }

        log::info!("Training Vocabulary...");
        let vocab: Vocabulary<T> = trainer.train(config.special_tokens.build()?)?;
        log::info!("Vocabulary Size: {}", vocab.size());

        let target = match self.output.as_deref() {
            Some("-") => None,
            Some(path) => Some(PathBuf::from(path)),
            None => config.model.path.clone(),
        };
        match target {
            Some(path) => {
                log::info!("output: {}", path.display());
                save_vocab_path(&vocab, &path, self.overwrite || config.model.overwrite)?;
            }
            None => {
                let mut writer = std::io::stdout().lock();
                write_vocab(&vocab, &mut writer)?;
            }
        }

        Ok(())
    }
}
