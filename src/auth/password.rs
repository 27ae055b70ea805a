use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fmt;

const SALT_LEN: usize = 16;

/// Salted SHA-256 digest of a password, kept as `salt$digest` in hex.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes `password` under a fresh random salt.
    pub fn new(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        Self(format!("{}${}", hex::encode(salt), hex::encode(digest(&salt, password))))
    }

    pub fn verify(&self, password: &str) -> bool {
        let Some((salt_hex, stored)) = self.0.split_once('$') else {
            return false;
        };
        let Ok(salt) = hex::decode(salt_hex) else {
            return false;
        };
        let candidate = hex::encode(digest(&salt, password));

        // Compare every byte so timing does not reveal the matching prefix.
        candidate.len() == stored.len()
            && candidate
                .bytes()
                .zip(stored.bytes())
                .fold(0u8, |diff, (a, b)| diff | (a ^ b))
                == 0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

/// Random opaque session token: 30 bytes rendered as 60 hex characters.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 30];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_only_the_original_password() {
        let hash = PasswordHash::new("cliente123");
        assert!(hash.verify("cliente123"));
        assert!(!hash.verify("cliente124"));
        assert!(!hash.verify(""));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        assert_ne!(PasswordHash::new("admin123"), PasswordHash::new("admin123"));
    }

    #[test]
    fn test_debug_hides_digest() {
        assert_eq!(format!("{:?}", PasswordHash::new("secret")), "PasswordHash(..)");
    }

    #[test]
    fn test_tokens_are_long_and_unique() {
        let a = generate_token();
        assert_eq!(a.len(), 60);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, generate_token());
    }
}
