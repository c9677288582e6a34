pub mod keys;

pub use keys::SoftwareProvider;

use p256::ecdsa::SigningKey;

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("random generation failed: {0}")]
    Random(String),
    #[error("key generation failed: {0}")]
    KeyGeneration(String),
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("public key export failed: {0}")]
    KeyExport(String),
}

/// Source of randomness, P-256 keys and ES256 signatures.
///
/// Every call is treated as atomic: the ceremony handlers never retry and
/// surface any error to the caller unchanged.
pub trait CryptoProvider: Send + Sync {
    fn fill_random(&self, buf: &mut [u8]) -> Result<(), CryptoError>;

    fn generate_key(&self) -> Result<SigningKey, CryptoError>;

    /// ECDSA over SHA-256(`message`), returned as raw big-endian r || s.
    fn sign(&self, key: &SigningKey, message: &[u8]) -> Result<[u8; 64], CryptoError>;

    /// Affine (x, y) of the public half of `key`, each exactly 32 bytes.
    fn public_coords(&self, key: &SigningKey) -> Result<([u8; 32], [u8; 32]), CryptoError>;
}
