//! # Vocab Trainer

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::MCResult,
    tokenizer::{
        TextTokenizer,
        TokenizerConfig,
        tokenizer_config::{DEFAULT_MIN_FREQ, DEFAULT_VOCAB_SIZE},
    },
    training::TokenCounter,
    types::TokenType,
    vocab::{
        SpecialTokens,
        Vocabulary,
        validators::{try_min_freq, try_vocab_size},
    },
};

/// Options for [`VocabTrainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabTrainerOptions {
    /// The vocab size bound, including special tokens.
    pub vocab_size: usize,

    /// The minimum corpus frequency of an admitted token.
    pub min_freq: usize,
}

impl Default for VocabTrainerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VOCAB_SIZE, DEFAULT_MIN_FREQ)
    }
}

impl VocabTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    /// * `min_freq` - The minimum admission frequency.
    ///
    /// ## Returns
    /// A new `VocabTrainerOptions` instance.
    pub fn new(
        vocab_size: usize,
        min_freq: usize,
    ) -> Self {
        Self {
            vocab_size,
            min_freq,
        }
    }

    /// Read the training bounds from a config.
    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self::new(config.vocab_size, config.min_freq)
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size, including special tokens.
    ///
    /// ## Returns
    /// The updated `VocabTrainerOptions` instance.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the minimum admission frequency.
    ///
    /// ## Arguments
    /// * `min_freq` - The minimum count; must be >= 1.
    ///
    /// ## Returns
    /// The updated `VocabTrainerOptions` instance.
    pub fn with_min_freq(
        self,
        min_freq: usize,
    ) -> Self {
        Self { min_freq, ..self }
    }

    /// Initializes a [`VocabTrainer`] from these options.
    ///
    /// ## Arguments
    /// * `tokenizer` - The tokenizer applied to every corpus line.
    pub fn init<E: TextTokenizer>(
        self,
        tokenizer: E,
    ) -> VocabTrainer<E> {
        VocabTrainer::new(self, tokenizer)
    }
}

/// Frequency based vocabulary trainer.
///
/// # Parameters
/// * `E` - the tokenizer applied to each corpus line.
pub struct VocabTrainer<E: TextTokenizer> {
    /// Trainer options.
    pub options: VocabTrainerOptions,

    /// The corpus tokenizer.
    pub tokenizer: E,

    /// The token counts.
    pub counter: TokenCounter,

    /// Lines consumed so far.
    lines: usize,

    /// Files consumed so far.
    files: usize,
}

impl<E: TextTokenizer> VocabTrainer<E> {
    /// Initializes a [`VocabTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    /// * `tokenizer` - The corpus tokenizer.
    ///
    /// ## Returns
    /// A new `VocabTrainer` instance.
    pub fn new(
        options: VocabTrainerOptions,
        tokenizer: E,
    ) -> Self {
        Self {
            options,
            tokenizer,
            counter: TokenCounter::with_capacity(10_000),
            lines: 0,
            files: 0,
        }
    }

    /// The number of lines consumed.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// The number of files consumed.
    pub fn files(&self) -> usize {
        self.files
    }

    /// Count the tokens of one line; surrounding whitespace is trimmed.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let tokens = self.tokenizer.tokenize(text.as_ref().trim());
        self.counter.update(tokens);
        self.lines += 1;
    }

    /// Update counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like lines.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Update counts from every line of a reader.
    ///
    /// ## Returns
    /// The number of lines read.
    pub fn update_from_reader<R: BufRead>(
        &mut self,
        reader: R,
    ) -> MCResult<usize> {
        let mut count = 0;
        for line in reader.lines() {
            self.update_from_text(line?);
            count += 1;
        }
        Ok(count)
    }

    /// Update counts from every line of a file.
    ///
    /// ## Returns
    /// The number of lines read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, path)))]
    pub fn update_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> MCResult<usize> {
        let path = path.as_ref();
        let count = self.update_from_reader(BufReader::new(File::open(path)?))?;
        self.files += 1;
        log::debug!("read {} lines from {:?}", count, path);
        Ok(count)
    }

    /// Trains a [`Vocabulary<T>`].
    ///
    /// Special tokens are registered first; then tokens are admitted by
    /// descending frequency (first-seen order on ties), skipping tokens
    /// below `min_freq`, until ``vocab_size - specials.len()`` ordinary
    /// words are admitted. Corpus tokens that collide with a special token
    /// text are not admitted.
    ///
    /// ## Arguments
    /// * `specials` - The reserved special tokens.
    ///
    /// ## Returns
    /// The trained vocabulary; or a sizing / `min_freq` error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, specials)))]
    pub fn train<T: TokenType>(
        self,
        specials: SpecialTokens<T>,
    ) -> MCResult<Vocabulary<T>> {
        let vocab_size = try_vocab_size::<T>(self.options.vocab_size, specials.len())?;
        let min_freq = try_min_freq(self.options.min_freq)?;
        let limit = vocab_size - specials.len();

        log::info!(
            "Starting vocab training: {} files, {} lines, {} unique tokens ({} total)",
            self.files,
            self.lines,
            self.counter.len(),
            self.counter.total()
        );

        let mut vocab = Vocabulary::new(specials);
        let mut admitted = 0;
        for (token, count) in self.counter.most_common() {
            if admitted >= limit {
                break;
            }
            if count < min_freq {
                // Ranked by count; nothing later qualifies.
                break;
            }
            if vocab.contains(token) {
                continue;
            }
            vocab.add_word(token)?;
            admitted += 1;
        }

        if admitted == 0 {
            log::warn!(
                "Training admitted no ordinary tokens (min_freq = {}); vocab holds only special tokens",
                min_freq
            );
        }
        log::info!(
            "Finished training: {} tokens admitted, vocab size {}",
            admitted,
            vocab.size()
        );

        Ok(vocab)
    }
}
