//! Keccak-256, the hash behind Ethereum addresses and EIP-55 checksums.

use sha3::{Digest, Keccak256};

/// Compute the legacy Keccak-256 digest (not NIST SHA3-256).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_vector() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn differs_from_sha3() {
        use sha3::Sha3_256;
        let sha3 = Sha3_256::digest(b"multiseed");
        assert_ne!(keccak256(b"multiseed")[..], sha3[..]);
    }
}
