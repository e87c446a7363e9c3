//! One-way password hashing.
//!
//! Stored form is `<base64 salt>$<base64 digest>`. Callers only ever need
//! `hash` and `matches`; the scheme behind them is deliberately not part
//! of any contract.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;

const SALT_LEN: usize = 16;

fn digest(salt: &[u8], password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize()
}

/// Hash a password under a fresh random salt.
pub fn hash(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    let digest = digest(&salt, password);
    format!(
        "{}${}",
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(digest.as_bytes())
    )
}

/// Check a password against a stored hash.
///
/// An unparsable stored value compares as a mismatch rather than an error;
/// the caller cannot do anything more useful with it.
pub fn matches(password: &str, stored: &str) -> bool {
    let Some((salt_b64, digest_b64)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = STANDARD_NO_PAD.decode(salt_b64) else {
        return false;
    };
    let Ok(expected) = STANDARD_NO_PAD.decode(digest_b64) else {
        return false;
    };
    let Ok(expected) = <[u8; blake3::OUT_LEN]>::try_from(expected.as_slice()) else {
        return false;
    };

    // blake3::Hash equality is constant-time.
    digest(&salt, password) == blake3::Hash::from(expected)
}

#[cfg(test)]
mod tests {
    use super::{hash, matches};

    #[test]
    fn hash_then_match_roundtrip() {
        let stored = hash("Hunter2hunter2");
        assert!(matches("Hunter2hunter2", &stored));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let stored = hash("Hunter2hunter2");
        assert!(!matches("hunter2hunter2", &stored));
        assert!(!matches("", &stored));
    }

    #[test]
    fn salts_are_per_hash() {
        assert_ne!(hash("same-password"), hash("same-password"));
    }

    #[test]
    fn garbage_stored_value_is_a_mismatch() {
        assert!(!matches("anything", ""));
        assert!(!matches("anything", "no-separator"));
        assert!(!matches("anything", "!!$!!"));
    }
}
