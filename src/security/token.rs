/// Opaque bearer token key generation
use rand::RngCore;

/// Length of a token key in hex characters
pub const TOKEN_KEY_LEN: usize = 40;

/// Generate a fixed-length opaque token key from 20 CSPRNG bytes.
/// Not derivable from member identity.
pub fn generate_key() -> String {
    let mut bytes = [0u8; TOKEN_KEY_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
