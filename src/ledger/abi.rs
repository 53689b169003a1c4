//! ledger::abi
//!
//! Minimal ABI encoding/decoding for the two ERC-721 reads this tool
//! makes. Call data and results are the `0x`-prefixed hex strings used by
//! `eth_call`.
//!
//! Only two shapes are handled: a single `uint256` return
//! (`totalSupply()`) and a single dynamic `string` return
//! (`tokenURI(uint256)`), so a full ABI library is not pulled in.

use thiserror::Error;

/// Function selector for `totalSupply()`.
const SELECTOR_TOTAL_SUPPLY: &str = "18160ddd";

/// Function selector for `tokenURI(uint256)`.
const SELECTOR_TOKEN_URI: &str = "c87b56dd";

/// ABI word size in bytes.
const WORD: usize = 32;

/// Errors decoding `eth_call` results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// The result was not valid hex.
    #[error("invalid hex in call result")]
    InvalidHex,

    /// The result was shorter than the decoded shape requires.
    #[error("call result too short: {0} bytes")]
    TooShort(usize),

    /// A uint256 value does not fit in u64.
    #[error("uint256 value exceeds u64 range")]
    Overflow,

    /// A dynamic string's offset or length points outside the result.
    #[error("string offset or length out of bounds")]
    OutOfBounds,

    /// The string payload is not valid UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
}

/// Call data for `totalSupply()`.
pub fn encode_total_supply() -> String {
    format!("0x{SELECTOR_TOTAL_SUPPLY}")
}

/// Call data for `tokenURI(uint256)` with the token id as a 32-byte word.
pub fn encode_token_uri(token_id: u64) -> String {
    format!("0x{SELECTOR_TOKEN_URI}{token_id:064x}")
}

fn decode_hex(data: &str) -> Result<Vec<u8>, AbiError> {
    let stripped = data.strip_prefix("0x").unwrap_or(data);
    hex::decode(stripped).map_err(|_| AbiError::InvalidHex)
}

/// Read one 32-byte word at `at` as a usize, requiring the high bytes to
/// be zero.
fn word_as_usize(bytes: &[u8], at: usize) -> Result<usize, AbiError> {
    let end = at.checked_add(WORD).ok_or(AbiError::OutOfBounds)?;
    let word = bytes.get(at..end).ok_or(AbiError::OutOfBounds)?;
    if word[..WORD - 8].iter().any(|&b| b != 0) {
        return Err(AbiError::Overflow);
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[WORD - 8..]);
    Ok(u64::from_be_bytes(tail) as usize)
}

/// Decode a single `uint256` return value into a `u64`.
pub fn decode_uint(data: &str) -> Result<u64, AbiError> {
    let bytes = decode_hex(data)?;
    if bytes.len() < WORD {
        return Err(AbiError::TooShort(bytes.len()));
    }
    if bytes[..WORD - 8].iter().any(|&b| b != 0) {
        return Err(AbiError::Overflow);
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&bytes[WORD - 8..WORD]);
    Ok(u64::from_be_bytes(tail))
}

/// Decode a single dynamic `string` return value.
///
/// Layout: one word holding the offset of the string head, then at that
/// offset one word holding the byte length, then the UTF-8 payload.
pub fn decode_string(data: &str) -> Result<String, AbiError> {
    let bytes = decode_hex(data)?;
    if bytes.len() < 2 * WORD {
        return Err(AbiError::TooShort(bytes.len()));
    }
    let offset = word_as_usize(&bytes, 0)?;
    let len = word_as_usize(&bytes, offset)?;
    let start = offset.checked_add(WORD).ok_or(AbiError::OutOfBounds)?;
    let end = start.checked_add(len).ok_or(AbiError::OutOfBounds)?;
    let payload = bytes.get(start..end).ok_or(AbiError::OutOfBounds)?;
    String::from_utf8(payload.to_vec()).map_err(|_| AbiError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ABI-encode a string return value the way a node would.
    fn encoded_string(s: &str) -> String {
        let mut out = String::from("0x");
        out.push_str(&format!("{:064x}", 0x20));
        out.push_str(&format!("{:064x}", s.len()));
        let mut payload = hex::encode(s.as_bytes());
        // Pad the tail to a word boundary.
        while payload.len() % 64 != 0 {
            payload.push('0');
        }
        out.push_str(&payload);
        out
    }

    #[test]
    fn total_supply_call_data() {
        assert_eq!(encode_total_supply(), "0x18160ddd");
    }

    #[test]
    fn token_uri_call_data_embeds_the_id() {
        let data = encode_token_uri(1);
        assert_eq!(data.len(), 2 + 8 + 64);
        assert!(data.starts_with("0xc87b56dd"));
        assert!(data.ends_with(&format!("{:064x}", 1u64)));

        assert!(encode_token_uri(0xdead).ends_with(&format!("{:064x}", 0xdeadu64)));
    }

    #[test]
    fn decode_uint_reads_the_low_word() {
        assert_eq!(decode_uint(&format!("0x{:064x}", 3u64)).unwrap(), 3);
        assert_eq!(
            decode_uint(&format!("0x{:064x}", 10_000u64)).unwrap(),
            10_000
        );
    }

    #[test]
    fn decode_uint_rejects_oversized_values() {
        let mut word = "0x".to_string();
        word.push_str(&"ff".repeat(32));
        assert_eq!(decode_uint(&word), Err(AbiError::Overflow));
    }

    #[test]
    fn decode_uint_rejects_short_results() {
        assert_eq!(decode_uint("0x"), Err(AbiError::TooShort(0)));
        assert_eq!(decode_uint("0x1234"), Err(AbiError::TooShort(2)));
    }

    #[test]
    fn decode_string_round_trips() {
        let data = encoded_string("ipfs://QmHash/1.json");
        assert_eq!(decode_string(&data).unwrap(), "ipfs://QmHash/1.json");
    }

    #[test]
    fn decode_string_handles_empty() {
        let data = encoded_string("");
        assert_eq!(decode_string(&data).unwrap(), "");
    }

    #[test]
    fn decode_string_rejects_overflowing_offset() {
        // An offset word holding u64::MAX passes the high-bytes check but
        // cannot address anything.
        let data = format!("0x{:064x}{:064x}", u64::MAX, 0u64);
        assert_eq!(decode_string(&data), Err(AbiError::OutOfBounds));
    }

    #[test]
    fn decode_string_rejects_dangling_offset() {
        // Offset points past the end of the data.
        let data = format!("0x{:064x}{:064x}", 0x200, 0);
        assert_eq!(decode_string(&data), Err(AbiError::OutOfBounds));
    }

    #[test]
    fn decode_rejects_bad_hex() {
        assert_eq!(decode_uint("0xzz"), Err(AbiError::InvalidHex));
    }
}
