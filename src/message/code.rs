//! Promo code derivation

use sha2::{Digest, Sha256};

/// Hex characters of the digest kept in a code
pub const CODE_DIGEST_LEN: usize = 8;

/// Build `<prefix>-<digest>` from a row id
///
/// The digest is the start of the uppercase hex SHA-256 of the id, so a row
/// gets the same code on every run.
pub fn promo_code(prefix: &str, row_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(row_id.as_bytes());
    let digest = hex::encode_upper(hasher.finalize());
    format!("{}-{}", prefix, &digest[..CODE_DIGEST_LEN])
}
