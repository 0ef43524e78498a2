use bech32::{FromBase32, ToBase32, Variant};
use thiserror::Error;

/// Longest token accepted or produced, in characters.
///
/// The `bech32` crate only bounds the human-readable part (83 characters)
/// and leaves the whole-token limit to its callers, so [`decode`] and
/// [`encode`] enforce it here.
pub const MAX_TOKEN_LENGTH: usize = 90;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Alphabet, case, structure or checksum failure reported by the codec.
    #[error("malformed bech32 token: {0}")]
    Bech32(#[from] bech32::Error),
    #[error("token is {0} characters long, bech32 allows at most {}", MAX_TOKEN_LENGTH)]
    TooLong(usize),
    /// The checksum verifies only under the bech32m constant.
    #[error("token carries a bech32m checksum, expected classic bech32")]
    Bech32mChecksum,
    /// Leftover bits after 5-to-8 regrouping are non-zero or too many.
    #[error("data part does not regroup into whole bytes: {0}")]
    Regroup(#[source] bech32::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The prefix is empty, too long or holds characters outside ASCII 33..=126.
    #[error("cannot encode under this prefix: {0}")]
    Bech32(#[from] bech32::Error),
    #[error("encoded token is {0} characters long, bech32 allows at most {}", MAX_TOKEN_LENGTH)]
    TooLong(usize),
}

/// A bech32 token decoded down to its raw byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    hrp: String,
    payload: Vec<u8>,
}

impl DecodedToken {
    /// Human-readable part, always lowercase.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload as lowercase hex, empty for an empty payload.
    pub fn payload_hex(&self) -> String {
        hex::encode(&self.payload)
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.hrp, self.payload)
    }
}

/// Decodes a bech32 token into its human-readable part and byte payload.
///
/// The token must be at most [`MAX_TOKEN_LENGTH`] characters, carry a
/// classic bech32 checksum and hold a data part that regroups from 5-bit
/// symbols into whole bytes with all leftover padding bits zero.
pub fn decode(token: &str) -> Result<DecodedToken, DecodeError> {
    let length = token.chars().count();
    if length > MAX_TOKEN_LENGTH {
        return Err(DecodeError::TooLong(length));
    }

    let (hrp, data, variant) = bech32::decode(token)?;
    if variant != Variant::Bech32 {
        return Err(DecodeError::Bech32mChecksum);
    }

    let payload = Vec::<u8>::from_base32(&data).map_err(DecodeError::Regroup)?;
    Ok(DecodedToken { hrp, payload })
}

/// Encodes a byte payload as a classic bech32 token under the given prefix.
///
/// The reverse of [`decode`]: 8-bit bytes are regrouped into 5-bit symbols
/// with zero padding. An uppercase prefix is folded to lowercase.
pub fn encode(hrp: &str, payload: &[u8]) -> Result<String, EncodeError> {
    let token = bech32::encode(hrp, payload.to_base32(), Variant::Bech32)?;
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(EncodeError::TooLong(token.len()));
    }
    Ok(token)
}

/// Parses a hex payload, tolerating an optional `0x`/`0X` prefix.
pub fn parse_hex_payload(payload: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let raw = payload
        .strip_prefix("0x")
        .or_else(|| payload.strip_prefix("0X"))
        .unwrap_or(payload);
    hex::decode(raw)
}
