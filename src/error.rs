/// Unified error type for all mnemonic codec operations.
///
/// Every error is terminal for the call that produced it; the codec is
/// deterministic, so there is nothing to retry without different input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("entropy length must be a multiple of 32 bits and between 128 and 256 bits")]
    InvalidEntropyLength,

    #[error("mnemonic must contain 12, 15, 18, 21 or 24 words")]
    InvalidMnemonicLength,

    #[error("word '{0}' is not in the active wordlist")]
    UnknownWord(String),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),
}
