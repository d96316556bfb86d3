//! Opaque session tokens.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::{Rng, rng};

/// Number of random bytes behind each token.
const TOKEN_BYTES: usize = 32;

/// Generate a random URL-safe token (43 chars). Tokens are not stored.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}
