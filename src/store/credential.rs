use p256::ecdsa::SigningKey;

/// Per-credential authenticator state. Only the signature counter ever changes.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    credential_id: Vec<u8>, // 32 bytes random
    signing_key: SigningKey,
    signature_counter: u32,
    user_id: String,
}

impl CredentialRecord {
    pub(crate) fn new(credential_id: Vec<u8>, signing_key: SigningKey, user_id: String) -> Self {
        Self {
            credential_id,
            signing_key,
            signature_counter: 0,
            user_id,
        }
    }

    pub fn credential_id(&self) -> &[u8] {
        &self.credential_id
    }

    pub fn signature_counter(&self) -> u32 {
        self.signature_counter
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Advance the counter by one and return the new value. `None` once it
    /// would wrap; the counter is left untouched in that case.
    pub(crate) fn next_signature_counter(&mut self) -> Option<u32> {
        let next = self.signature_counter.checked_add(1)?;
        self.signature_counter = next;
        Some(next)
    }
}
