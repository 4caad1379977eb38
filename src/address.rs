//! Algorand address codec.
//!
//! An address is the RFC4648 base32 encoding (uppercase, no padding) of a
//! 32-byte public key followed by a 4-byte checksum. The checksum is the
//! last four bytes of `SHA-512/256(public_key)`. ARC-19 assets reuse the
//! reserve address to carry raw digest bytes, so decoding here treats the
//! key as opaque material.

use multibase::Base;
use sha2::{Digest, Sha512_256};
use thiserror::Error;

/// Length of a textual address.
pub const ADDRESS_LEN: usize = 58;

const PUBLIC_KEY_LEN: usize = 32;
const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be 58 characters, got {0}")]
    InvalidLength(usize),
    #[error("address is not valid base32")]
    InvalidEncoding,
    #[error("address checksum does not match")]
    ChecksumMismatch,
}

/// Decode a checksummed address into its 32 bytes of key material.
pub fn decode(address: &str) -> Result<[u8; 32], AddressError> {
    if address.len() != ADDRESS_LEN {
        return Err(AddressError::InvalidLength(address.len()));
    }

    let bytes = Base::Base32Upper
        .decode(address)
        .map_err(|_| AddressError::InvalidEncoding)?;
    if bytes.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
        return Err(AddressError::InvalidEncoding);
    }

    let (key, checksum) = bytes.split_at(PUBLIC_KEY_LEN);
    let mut public_key = [0u8; PUBLIC_KEY_LEN];
    public_key.copy_from_slice(key);

    if checksum != compute_checksum(&public_key) {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(public_key)
}

/// Encode 32 bytes of key material as a checksummed address.
pub fn encode(public_key: &[u8; 32]) -> String {
    let mut bytes = Vec::with_capacity(PUBLIC_KEY_LEN + CHECKSUM_LEN);
    bytes.extend_from_slice(public_key);
    bytes.extend_from_slice(&compute_checksum(public_key));
    Base::Base32Upper.encode(bytes)
}

fn compute_checksum(public_key: &[u8; 32]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha512_256::digest(public_key);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ADDRESS: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ";
    const COUNTING_ADDRESS: &str = "AAAQEAYEAUDAOCAJBIFQYDIOB4IBCEQTCQKRMFYYDENBWHA5DYP7MUPJQE";

    fn counting_key() -> [u8; 32] {
        let mut key = [0u8; 32];
        for (i, b) in key.iter_mut().enumerate() {
            *b = i as u8;
        }
        key
    }

    #[test]
    fn decodes_zero_address() {
        assert_eq!(decode(ZERO_ADDRESS).unwrap(), [0u8; 32]);
    }

    #[test]
    fn encodes_known_vectors() {
        assert_eq!(encode(&[0u8; 32]), ZERO_ADDRESS);
        assert_eq!(encode(&counting_key()), COUNTING_ADDRESS);
        assert_eq!(decode(COUNTING_ADDRESS).unwrap(), counting_key());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(decode("ABC"), Err(AddressError::InvalidLength(3)));
        assert_eq!(decode(""), Err(AddressError::InvalidLength(0)));
    }

    #[test]
    fn rejects_non_base32() {
        let bad = format!("{}1", &ZERO_ADDRESS[..ADDRESS_LEN - 1]);
        assert_eq!(decode(&bad), Err(AddressError::InvalidEncoding));
    }

    #[test]
    fn rejects_bad_checksum() {
        let bad = ZERO_ADDRESS.replacen('A', "B", 1);
        assert_eq!(decode(&bad), Err(AddressError::ChecksumMismatch));
    }
}
