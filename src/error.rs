#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported attestation format {0:?}, only \"none\" is supported")]
    UnsupportedAttestation(String),
    #[error("credential not found: {0}")]
    UnknownCredential(String),
    #[error("signature counter exhausted for credential {0}")]
    CounterExhausted(String),
    #[error("crypto: {0}")]
    Crypto(#[from] crate::crypto::CryptoError),
    #[error("CBOR: {0}")]
    Cbor(String),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Internal(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
