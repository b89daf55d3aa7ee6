use crate::commands::{cat::CatArgs, pointer::PointerArgs, train::TrainArgs};

pub mod cat;
pub mod pointer;
pub mod train;

/// Subcommands for mchipper.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a vocabulary from text files.
    Train(TrainArgs),

    /// Act as a streaming tokenizer.
    Cat(CatArgs),

    /// Encode source/target pairs with per-document pointer IDs.
    Pointer(PointerArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
            Commands::Pointer(cmd) => cmd.run(),
        }
    }

    /// Run the subcommand without installing a logger.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.execute(),
            Commands::Cat(cmd) => cmd.execute(),
            Commands::Pointer(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use morphchipper::testing::{TEST_CORPUS, TEST_LEXICON};

    use crate::Args;

    fn execute(args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        Args::try_parse_from(args)?.command.execute()
    }

    #[test]
    fn test_train_then_cat() {
        tempdir::TempDir::new("mchipper_test")
            .and_then(|dir| {
                let corpus = dir.path().join("corpus.txt");
                let lexicon = dir.path().join("lexicon.tsv");
                let vocab = dir.path().join("model").join("vocab.txt");
                let ids = dir.path().join("ids.txt");
                let decoded = dir.path().join("decoded.txt");

                let corpus_text = format!("{}\n", TEST_CORPUS.join("\n"));
                fs::write(&corpus, &corpus_text)?;
                fs::write(&lexicon, TEST_LEXICON)?;

                let corpus = corpus.to_str().unwrap();
                let lexicon = lexicon.to_str().unwrap();
                let vocab = vocab.to_str().unwrap();
                let ids = ids.to_str().unwrap();
                let decoded = decoded.to_str().unwrap();

                let train = [
                    "mchipper", "train", corpus, "--lexicon", lexicon, "--min-freq", "1",
                    "--output", vocab,
                ];
                execute(&train).unwrap();
                assert!(execute(&train).is_err());

                execute(&[
                    "mchipper", "cat", "--model", vocab, "--lexicon", lexicon, "--input", corpus,
                    "--output", ids,
                ])
                .unwrap();
                let encoded = fs::read_to_string(ids)?;
                assert_eq!(encoded.lines().count(), TEST_CORPUS.len());
                for line in encoded.lines() {
                    // Every corpus token was admitted, so no unknown IDs.
                    assert!(line.split(' ').all(|id| id.parse::<u32>().unwrap() != 1));
                }

                execute(&[
                    "mchipper", "cat", "--decode", "--model", vocab, "--lexicon", lexicon,
                    "--input", ids, "--output", decoded,
                ])
                .unwrap();
                assert_eq!(fs::read_to_string(decoded)?, corpus_text);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_pointer() {
        tempdir::TempDir::new("mchipper_test")
            .and_then(|dir| {
                let corpus = dir.path().join("corpus.txt");
                let lexicon = dir.path().join("lexicon.tsv");
                let vocab = dir.path().join("vocab.txt");
                let source = dir.path().join("source.txt");
                let target = dir.path().join("target.txt");
                let output = dir.path().join("pointer.jsonl");

                fs::write(&corpus, TEST_CORPUS.join("\n"))?;
                fs::write(&lexicon, TEST_LEXICON)?;
                fs::write(&source, "kitaplarım kalem evde\n")?;
                fs::write(&target, "kalem silgi\n")?;

                let corpus = corpus.to_str().unwrap();
                let lexicon = lexicon.to_str().unwrap();
                let vocab = vocab.to_str().unwrap();

                execute(&[
                    "mchipper", "train", corpus, "--lexicon", lexicon, "--min-freq", "1",
                    "--output", vocab,
                ])
                .unwrap();
                execute(&[
                    "mchipper",
                    "pointer",
                    "--model",
                    vocab,
                    "--lexicon",
                    lexicon,
                    "--source",
                    source.to_str().unwrap(),
                    "--target",
                    target.to_str().unwrap(),
                    "--output",
                    output.to_str().unwrap(),
                ])
                .unwrap();

                let text = fs::read_to_string(&output)?;
                let records = text
                    .lines()
                    .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
                    .collect::<Vec<_>>();
                assert_eq!(records.len(), 1);

                let record = &records[0];
                assert_eq!(record["source"]["oovs"], serde_json::json!(["kalem"]));
                assert_eq!(
                    record["target"]["extended_ids"][0],
                    record["source"]["extended_ids"][3]
                );
                assert_eq!(record["target"]["extended_ids"][1], serde_json::json!(1));

                Ok(())
            })
            .unwrap();
    }
}
