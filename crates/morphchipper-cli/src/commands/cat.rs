use std::io::{BufRead, Write};

use morphchipper::{TokenCodec, TokenizerEngine};

use crate::{
    LogArgs,
    T,
    config_args::{ConfigArgs, ModelArgs},
    input_output::{InputArgs, OutputArgs},
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    model: ModelArgs,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;
        self.execute()
    }

    /// Run the cat command without installing a logger.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config = self.config.load_config()?;
        let engine = self.config.build_engine(&config)?;
        let vocab = self.model.load_vocab(&config)?;
        let codec = TokenCodec::new(vocab, engine);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(&mut reader, &mut writer, &codec)?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &codec)?,
        }

        Ok(())
    }
}

fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &TokenCodec<T, TokenizerEngine>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids = codec.encode(&line?);

        for (idx, id) in ids.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &TokenCodec<T, TokenizerEngine>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids = line?
            .split_whitespace()
            .map(|s| s.parse::<T>())
            .collect::<Result<Vec<T>, _>>()?;

        writeln!(writer, "{}", codec.decode_trimmed(&ids)?)?;
        writer.flush()?;
    }
    Ok(())
}
