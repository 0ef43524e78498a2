//! Conversion between bech32 tokens and raw hex payloads.
//!
//! Wallet tooling shows account and contract addresses in their bech32 form
//! while protocol-level calls want the raw bytes. The [`convert`] module
//! decodes a bech32 token down to its byte payload (printed as lowercase hex
//! by the `bech32-to-hex` binary) and encodes a payload back into a token
//! (`hex-to-bech32`). Checksum verification and the 5-bit alphabet live in
//! the `bech32` crate; this crate layers the whole-token length rule and
//! classic-checksum-only decoding on top of it.

pub mod convert;
