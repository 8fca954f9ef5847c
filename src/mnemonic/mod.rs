//! BIP-39 entropy ↔ mnemonic conversion.
//!
//! Implements the checksummed codec between raw entropy and a
//! space-separated word phrase:
//!
//! 1. **Encode**: entropy (128–256 bits, multiple of 32) → SHA-256 checksum
//!    (1 bit per 32 entropy bits) appended → 11-bit groups → words.
//! 2. **Decode**: words → 11-bit indices → reassembled bit stream → split
//!    into entropy + checksum → checksum verified → entropy bytes.
//!
//! All bit handling is big-endian, most-significant-bit first, so output is
//! byte-for-byte compatible with every conformant implementation.
//!
//! Reference: <https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki>

use sha2::{Digest, Sha256};

use crate::wordlist::Wordlist;
use crate::MnemonicError;

/// Bits per mnemonic word.
const WORD_BITS: usize = 11;

/// Valid entropy bit-length bounds (inclusive).
const MIN_ENTROPY_BITS: usize = 128;
const MAX_ENTROPY_BITS: usize = 256;

// ---------------------------------------------------------------------------
// Checksum (shared by encode and decode)
// ---------------------------------------------------------------------------

/// Append the entropy's checksum bits to it, returning the combined stream
/// as a byte buffer.
///
/// The checksum is the leading `entropy_bits / 32` bits of
/// `SHA-256(entropy)` (4–8 bits, so it always fits the first digest byte).
/// They occupy the high bits of the final buffer byte; the remaining low
/// bits are zero. Total meaningful bits: `entropy_bits + entropy_bits / 32`,
/// always a multiple of 11.
fn checksummed(entropy: &[u8]) -> Vec<u8> {
    let checksum_bits = entropy.len() * 8 / 32;
    let digest = Sha256::digest(entropy);
    let mut stream = entropy.to_vec();
    stream.push(digest[0] & (0xffu8 << (8 - checksum_bits)));
    stream
}

/// Read the bit at `pos` (MSB-first across the buffer).
fn bit_at(stream: &[u8], pos: usize) -> u16 {
    u16::from((stream[pos / 8] >> (7 - pos % 8)) & 1)
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode entropy bytes as a mnemonic phrase.
///
/// The entropy bit length must be a multiple of 32 in the range
/// [128, 256]; 128/160/192/224/256 bits yield 12/15/18/21/24 words. The
/// same entropy always yields the same phrase under a fixed wordlist.
///
/// # Arguments
/// * `entropy` - Raw entropy bytes.
/// * `wordlist` - The active 2048-word registry.
///
/// # Returns
/// The phrase as lowercase words joined by single ASCII spaces, or
/// `MnemonicError::InvalidEntropyLength`.
pub fn encode(entropy: &[u8], wordlist: &Wordlist) -> Result<String, MnemonicError> {
    let entropy_bits = entropy.len() * 8;
    if entropy_bits % 32 != 0
        || !(MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&entropy_bits)
    {
        return Err(MnemonicError::InvalidEntropyLength);
    }
    let checksum_bits = entropy_bits / 32;
    let word_count = (entropy_bits + checksum_bits) / WORD_BITS;

    let stream = checksummed(entropy);
    let mut words = Vec::with_capacity(word_count);
    for w in 0..word_count {
        let mut index: u16 = 0;
        for b in 0..WORD_BITS {
            index = (index << 1) | bit_at(&stream, w * WORD_BITS + b);
        }
        let word = wordlist.word_at(index).ok_or_else(|| {
            MnemonicError::InvalidWordlist(format!("word index {index} out of range"))
        })?;
        words.push(word);
    }
    Ok(words.join(" "))
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode a mnemonic phrase back to its entropy bytes.
///
/// The phrase is split on whitespace (runs of whitespace are tolerated),
/// each word is resolved through the registry, the 11-bit indices are
/// repacked into the combined bit stream, and the checksum is recomputed
/// over the entropy portion and compared against the embedded one.
///
/// `decode(encode(e)) == e` for every valid entropy `e`; a corrupted
/// phrase is rejected with probability `1 - 2^-checksum_bits`.
///
/// # Arguments
/// * `mnemonic` - The phrase (12, 15, 18, 21 or 24 words).
/// * `wordlist` - The active 2048-word registry.
///
/// # Returns
/// The entropy bytes, or `InvalidMnemonicLength` / `UnknownWord` /
/// `InvalidChecksum`.
pub fn decode(mnemonic: &str, wordlist: &Wordlist) -> Result<Vec<u8>, MnemonicError> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    let checksum_bits = match words.len() {
        12 => 4,
        15 => 5,
        18 => 6,
        21 => 7,
        24 => 8,
        _ => return Err(MnemonicError::InvalidMnemonicLength),
    };
    let entropy_bits = checksum_bits * 32;

    // Repack the 11-bit word indices MSB-first into one buffer. Its length
    // matches the checksummed() layout: entropy bytes plus one byte holding
    // the checksum bits high, trailing bits zero.
    let mut stream = vec![0u8; entropy_bits / 8 + 1];
    let mut pos = 0;
    for word in &words {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))?;
        for b in (0..WORD_BITS).rev() {
            if (index >> b) & 1 == 1 {
                stream[pos / 8] |= 1 << (7 - pos % 8);
            }
            pos += 1;
        }
    }

    // Split at the entropy/checksum boundary and verify by recomputing the
    // shared checksum over the extracted entropy.
    let entropy = stream[..entropy_bits / 8].to_vec();
    if checksummed(&entropy) != stream {
        return Err(MnemonicError::InvalidChecksum);
    }
    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Published English test vectors (entropy hex, expected phrase),
    // covering every entropy size in both directions.
    const VECTORS: &[(&str, &str)] = &[
        (
            "00000000000000000000000000000000",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        ),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        ),
        (
            "80808080808080808080808080808080",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        ),
        (
            "ffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        ),
        (
            "000000000000000000000000000000000000000000000000",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        ),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal will",
        ),
        (
            "808080808080808080808080808080808080808080808080",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter always",
        ),
        (
            "ffffffffffffffffffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo when",
        ),
        (
            "0000000000000000000000000000000000000000000000000000000000000000",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        ),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth title",
        ),
        (
            "8080808080808080808080808080808080808080808080808080808080808080",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
        ),
        (
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        ),
        (
            "9e885d952ad362caeb4efe34a8e91bd2",
            "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        ),
        (
            "c0ba5a8e914111210f2bd131f3d5e08d",
            "scheme spot photo card baby mountain device kick cradle pact join borrow",
        ),
        (
            "23db8160a31d3e0dca3688ed941adbf3",
            "cat swing flag economy stadium alone churn speed unique patch report train",
        ),
        (
            "18ab19a9f54a9274f03e5209a2ac8a91",
            "board flee heavy tunnel powder denial science ski answer betray cargo cat",
        ),
        (
            "f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f",
            "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold",
        ),
    ];

    #[test]
    fn test_encode_vectors() {
        let list = Wordlist::english();
        for (entropy_hex, phrase) in VECTORS {
            let entropy = hex::decode(entropy_hex).unwrap();
            assert_eq!(&encode(&entropy, list).unwrap(), phrase, "{entropy_hex}");
        }
    }

    #[test]
    fn test_decode_vectors() {
        let list = Wordlist::english();
        for (entropy_hex, phrase) in VECTORS {
            let entropy = decode(phrase, list).unwrap();
            assert_eq!(&hex::encode(entropy), entropy_hex, "{phrase}");
        }
    }

    #[test]
    fn test_word_count_per_entropy_size() {
        let list = Wordlist::english();
        for (bytes, expected_words) in [(16, 12), (20, 15), (24, 18), (28, 21), (32, 24)] {
            let phrase = encode(&vec![0xab; bytes], list).unwrap();
            assert_eq!(phrase.split(' ').count(), expected_words);
        }
    }

    #[test]
    fn test_all_zero_decode_keeps_leading_zero_bytes() {
        let list = Wordlist::english();
        let phrase = encode(&[0u8; 16], list).unwrap();
        assert_eq!(decode(&phrase, list).unwrap(), vec![0u8; 16]);
    }

    #[test]
    fn test_encode_rejects_entropy_below_range() {
        // 96 bits: a multiple of 32, but too short.
        let err = encode(&[0u8; 12], Wordlist::english()).unwrap_err();
        assert_eq!(err, MnemonicError::InvalidEntropyLength);
    }

    #[test]
    fn test_encode_rejects_entropy_above_range() {
        // 288 bits: a multiple of 32, but too long.
        let err = encode(&[0u8; 36], Wordlist::english()).unwrap_err();
        assert_eq!(err, MnemonicError::InvalidEntropyLength);
    }

    #[test]
    fn test_encode_rejects_unaligned_entropy() {
        // 104 bits: in no valid size class (not a multiple of 32).
        let err = encode(&[0u8; 13], Wordlist::english()).unwrap_err();
        assert_eq!(err, MnemonicError::InvalidEntropyLength);
    }

    #[test]
    fn test_decode_rejects_13_words() {
        let phrase = ["abandon"; 13].join(" ");
        let err = decode(&phrase, Wordlist::english()).unwrap_err();
        assert_eq!(err, MnemonicError::InvalidMnemonicLength);
    }

    #[test]
    fn test_decode_rejects_empty_phrase() {
        let err = decode("", Wordlist::english()).unwrap_err();
        assert_eq!(err, MnemonicError::InvalidMnemonicLength);
    }

    #[test]
    fn test_decode_rejects_unknown_word() {
        let mut words = vec!["abandon"; 12];
        words[5] = "notaword";
        let err = decode(&words.join(" "), Wordlist::english()).unwrap_err();
        assert_eq!(err, MnemonicError::UnknownWord("notaword".to_string()));
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        // The valid 12-word all-zero phrase ends in "about", not "abandon".
        let phrase = ["abandon"; 12].join(" ");
        let err = decode(&phrase, Wordlist::english()).unwrap_err();
        assert_eq!(err, MnemonicError::InvalidChecksum);
    }

    #[test]
    fn test_decode_tolerates_irregular_whitespace() {
        let list = Wordlist::english();
        let phrase = "  zoo zoo  zoo zoo zoo\tzoo zoo zoo zoo\nzoo zoo wrong ";
        assert_eq!(
            hex::encode(decode(phrase, list).unwrap()),
            "ffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn test_custom_wordlist_roundtrip() {
        let words: Vec<String> = (0..2048).map(|i| format!("w{i:04}")).collect();
        let list = Wordlist::new(words).unwrap();
        let entropy = [0x5a; 20];
        let phrase = encode(&entropy, &list).unwrap();
        assert!(phrase.starts_with("w"));
        assert_eq!(decode(&phrase, &list).unwrap(), entropy);
        // The same phrase is meaningless under the English list.
        assert!(decode(&phrase, Wordlist::english()).is_err());
    }
}
