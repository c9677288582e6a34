use std::collections::HashMap;

use super::credential::CredentialRecord;

/// Process-lifetime credential registry keyed by base64url credential id.
#[derive(Debug, Default)]
pub struct CredentialStore {
    by_id: HashMap<String, CredentialRecord>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, credential_id: String, record: CredentialRecord) {
        if self.by_id.insert(credential_id, record).is_some() {
            tracing::warn!("Credential id collision, previous record replaced");
        }
    }

    pub fn get_by_id(&self, credential_id: &str) -> Option<&CredentialRecord> {
        self.by_id.get(credential_id)
    }

    pub(crate) fn get_mut_by_id(&mut self, credential_id: &str) -> Option<&mut CredentialRecord> {
        self.by_id.get_mut(credential_id)
    }

    pub fn contains(&self, credential_id: &str) -> bool {
        self.by_id.contains_key(credential_id)
    }

    pub fn credential_count(&self) -> usize {
        self.by_id.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::SigningKey;
    use rand::rngs::OsRng;

    fn record(user: &str) -> CredentialRecord {
        CredentialRecord::new(vec![0x42; 32], SigningKey::random(&mut OsRng), user.to_string())
    }

    #[test]
    fn test_store_add_and_lookup() {
        let mut store = CredentialStore::new();
        assert_eq!(store.credential_count(), 0);
        store.add("cred-a".into(), record("alice"));
        store.add("cred-b".into(), record("bob"));
        assert_eq!(store.credential_count(), 2);
        assert!(store.contains("cred-a"));
        assert_eq!(store.get_by_id("cred-b").unwrap().user_id(), "bob");
        assert!(store.get_by_id("cred-c").is_none());
    }

    #[test]
    fn test_store_mutation_is_per_record() {
        let mut store = CredentialStore::new();
        store.add("cred-a".into(), record("alice"));
        store.add("cred-b".into(), record("bob"));
        store.get_mut_by_id("cred-a").unwrap().next_signature_counter();
        assert_eq!(store.get_by_id("cred-a").unwrap().signature_counter(), 1);
        assert_eq!(store.get_by_id("cred-b").unwrap().signature_counter(), 0);
    }
}
