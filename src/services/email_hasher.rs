use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedHash {
    pub hash: String,
    pub salt: String,
}

/// One-way salted digest used to store emails without keeping the plaintext.
#[cfg_attr(test, mockall::automock)]
pub trait SaltedHasher: Send + Sync {
    /// Hash with a freshly generated salt, returning both.
    fn hash(&self, plaintext: &str) -> SaltedHash;

    /// Hash with a known salt. Must be deterministic for a given `(plaintext, salt)`.
    fn hash_with_salt(&self, plaintext: &str, salt: &str) -> String;
}

/// SHA-256 over `salt || plaintext`, hex encoded. Salts are 16 random bytes, base64 encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256SaltedHasher;

impl Sha256SaltedHasher {
    pub fn new() -> Self {
        Self
    }

    fn generate_salt() -> String {
        let mut bytes = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        BASE64.encode(bytes)
    }
}

impl SaltedHasher for Sha256SaltedHasher {
    fn hash(&self, plaintext: &str) -> SaltedHash {
        let salt = Self::generate_salt();
        let hash = self.hash_with_salt(plaintext, &salt);
        SaltedHash { hash, salt }
    }

    fn hash_with_salt(&self, plaintext: &str, salt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}
