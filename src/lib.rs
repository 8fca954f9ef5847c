//! BIP-39 mnemonic codec: deterministic, checksummed conversion between
//! raw entropy and a human-readable word phrase, and back.
//!
//! - [`wordlist`] — the [`Wordlist`](wordlist::Wordlist) registry: the
//!   ordered 2048-word alphabet and its reverse map, validated at load
//!   time. The standard English list ships in the crate.
//! - [`mnemonic`] — [`encode`](mnemonic::encode) and
//!   [`decode`](mnemonic::decode), the entropy ↔ phrase conversions with
//!   SHA-256 checksum generation and verification.
//!
//! Phrases are byte-for-byte compatible with other conformant
//! implementations, so entropy encoded here is recoverable by any standard
//! wallet tooling. Seed stretching (PBKDF2) and HD key derivation are
//! deliberately not part of this crate; its output phrase is the input to
//! those steps.
//!
//! ```
//! use hdwallet_mnemonic::{mnemonic, wordlist::Wordlist};
//!
//! let entropy = [0u8; 16];
//! let phrase = mnemonic::encode(&entropy, Wordlist::english())?;
//! assert_eq!(phrase.split(' ').count(), 12);
//! assert_eq!(mnemonic::decode(&phrase, Wordlist::english())?, entropy);
//! # Ok::<(), hdwallet_mnemonic::MnemonicError>(())
//! ```

pub mod mnemonic;
pub mod wordlist;

mod error;
pub use error::MnemonicError;
