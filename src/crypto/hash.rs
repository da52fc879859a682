//! Hashing and address derivation
//!
//! Provides the SHA-256 and Keccak-256 primitives used for module-account
//! addresses and code hashes. Keccak and CREATE addresses come from
//! `alloy-primitives`.

use crate::core::Address;
use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Computes SHA-256 hash and returns it as a hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Computes Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    alloy_primitives::keccak256(data).0
}

/// Computes Keccak-256 hash and returns it as a hex string
pub fn keccak256_hex(data: &[u8]) -> String {
    hex::encode(keccak256(data))
}

/// Address of a module-owned account: the first 20 bytes of `sha256(name)`.
pub fn module_address(name: &str) -> Address {
    let hash = sha256(name.as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[..20]);
    Address::new(bytes)
}

/// Classic contract-creation address: `keccak256(rlp([deployer, nonce]))[12..]`.
///
/// The same deployer and nonce always yield the same address.
pub fn create_address(deployer: &Address, nonce: u64) -> Address {
    alloy_primitives::Address::from(*deployer).create(nonce).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let data = b"hello world";
        let hash = sha256(data);
        assert_eq!(hash.len(), 32);
        assert_eq!(
            sha256_hex(data),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_keccak256() {
        assert_eq!(
            keccak256_hex(b""),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            keccak256_hex(b"Transfer(address,address,uint256)"),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn test_create_address_known_vectors() {
        let deployer: Address = "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0".parse().unwrap();

        assert_eq!(
            create_address(&deployer, 0).to_string(),
            "0xcd234a471b72ba2f1ccf0a70fcaba648a5eecd8d"
        );
        assert_eq!(
            create_address(&deployer, 1).to_string(),
            "0x343c43a37d37dff08ae8c4a11544c718abb4fcf8"
        );
        assert_eq!(
            create_address(&deployer, 2).to_string(),
            "0xf778b86fa74e846c4f0a1fbd1335fe81c00a0c91"
        );
    }

    #[test]
    fn test_create_address_is_deterministic() {
        let deployer = module_address("vfc_deployer");
        assert_eq!(create_address(&deployer, 7), create_address(&deployer, 7));
        assert_ne!(create_address(&deployer, 7), create_address(&deployer, 8));
        assert_ne!(create_address(&deployer, 0x80), create_address(&deployer, 0x7f));
    }

    #[test]
    fn test_module_address() {
        let address = module_address("vfc_deployer");
        assert_eq!(address.as_bytes()[..], sha256(b"vfc_deployer")[..20]);
        assert_ne!(address, module_address("bank"));
    }
}
