use std::io::{BufRead, Write};

use morphchipper::{
    ExtendedCodec,
    TokenCodec,
    codec::{SourceEncoding, TargetEncoding},
};
use serde::Serialize;

use crate::{
    LogArgs,
    T,
    config_args::{ConfigArgs, ModelArgs},
    input_output::{OutputArgs, open_path_reader},
};

/// Args for the pointer command.
#[derive(clap::Args, Debug)]
pub struct PointerArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    model: ModelArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Source documents, one per line.
    #[arg(long)]
    source: String,

    /// Target sequences, one per line, paired with `--source`.
    #[arg(long)]
    target: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

/// One JSON output record.
#[derive(Serialize)]
struct PointerRecord {
    source: SourceEncoding<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<TargetEncoding<T>>,
}

impl PointerArgs {
    /// Run the pointer command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;
        self.execute()
    }

    /// Run the pointer command without installing a logger.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config = self.config.load_config()?;
        let engine = self.config.build_engine(&config)?;
        let vocab = self.model.load_vocab(&config)?;
        let codec = ExtendedCodec::new(TokenCodec::new(vocab, engine));
        log::info!("pointer base: {}", codec.pointer_base());

        let sources = open_path_reader(&self.source)?.lines();
        let mut targets = match &self.target {
            Some(path) => Some(open_path_reader(path)?.lines()),
            None => None,
        };
        let mut writer = self.output.open_writer()?;

        let mut count = 0;
        for source in sources {
            let source = codec.encode_source(&source?)?;
            let target = match targets.as_mut().and_then(|t| t.next()) {
                Some(line) => Some(codec.encode_target(&line?, &source.oovs)?),
                None => None,
            };

            let record = PointerRecord { source, target };
            serde_json::to_writer(&mut writer, &record)?;
            writeln!(writer)?;
            count += 1;
        }
        writer.flush()?;
        log::info!("encoded {count} documents");

        Ok(())
    }
}
