//! Admin password generation.

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// Source of fresh credentials.
pub trait PasswordGenerator {
    /// Produce a new credential of exactly `length` characters.
    fn generate(&self, length: usize) -> Zeroizing<String>;
}

/// Base64 passwords drawn from the operating system's CSPRNG.
///
/// Reads `length` random bytes, encodes them with standard base64 and keeps
/// the first `length` characters, so the alphabet is `A-Za-z0-9+/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPassword;

impl PasswordGenerator for RandomPassword {
    fn generate(&self, length: usize) -> Zeroizing<String> {
        let mut bytes = Zeroizing::new(vec![0u8; length]);
        OsRng.fill_bytes(bytes.as_mut_slice());

        let mut encoded =
            Zeroizing::new(base64::engine::general_purpose::STANDARD.encode(bytes.as_slice()));
        encoded.truncate(length);
        encoded
    }
}
