/// The codec mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Encode from text to IDs.
    Encode,

    /// Decode from IDs to text.
    Decode,
}

/// Codec mode argument group; encoding is the default.
#[derive(clap::Args, Debug)]
#[group(required = false, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to IDs.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from IDs to text.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the codec mode.
    pub fn mode(&self) -> TokenizerMode {
        match (self.encode, self.decode) {
            (_, true) => TokenizerMode::Decode,
            _ => TokenizerMode::Encode,
        }
    }
}
