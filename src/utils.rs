use rand::Rng;

/// Entropy of an OAuth state token in bytes (128 bits).
pub const STATE_BYTES: usize = 16;

/// Entropy of a session identifier in bytes (128 bits).
pub const SESSION_ID_BYTES: usize = 16;

/// Returns `len` bytes from the thread-local CSPRNG, hex-encoded.
pub fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::rng().fill(bytes.as_mut_slice());
    hex::encode(bytes)
}

pub fn generate_state() -> String {
    random_hex(STATE_BYTES)
}

pub fn generate_session_id() -> String {
    random_hex(SESSION_ID_BYTES)
}

/// Masks a secret for logs and `Debug` output, keeping only its length visible.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        format!("***({} chars)", secret.chars().count())
    }
}
