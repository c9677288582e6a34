use std::sync::{Arc, Mutex};

use crate::crypto::{CryptoProvider, SoftwareProvider};
use crate::error::{Error, Result};
use crate::store::{self, CredentialStore, SharedStore};
use crate::webauthn::get_assertion::handle_get_assertion;
use crate::webauthn::make_credential::handle_make_credential;
use crate::webauthn::types::{
    AssertionResponse, PublicKeyCredentialCreationOptions, PublicKeyCredentialRequestOptions,
    RegistrationResponse,
};

/// A software WebAuthn authenticator with its own credential store.
///
/// Clones share the store and provider. Independent instances (one per
/// simulated device) are created with [`MockCredentials::new`].
#[derive(Clone)]
pub struct MockCredentials {
    store: SharedStore,
    provider: Arc<dyn CryptoProvider>,
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCredentials {
    pub fn new() -> Self {
        Self::with_store(Arc::new(Mutex::new(CredentialStore::new())))
    }

    pub fn with_store(store: SharedStore) -> Self {
        Self {
            store,
            provider: Arc::new(SoftwareProvider),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn CryptoProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Registration ceremony (`navigator.credentials.create`).
    ///
    /// Fails with [`Error::UnsupportedAttestation`] unless `options.attestation`
    /// is `"none"`. On any failure the store is left unchanged.
    pub fn create(
        &self,
        origin: &str,
        options: &PublicKeyCredentialCreationOptions,
    ) -> Result<RegistrationResponse> {
        handle_make_credential(origin, options, self.provider.as_ref(), &self.store)
    }

    /// Authentication ceremony (`navigator.credentials.get`) against a
    /// credential id previously returned by [`MockCredentials::create`].
    ///
    /// Each call advances that credential's signature counter by exactly one.
    /// Fails with [`Error::UnknownCredential`] without touching any counter.
    pub fn get(
        &self,
        origin: &str,
        options: &PublicKeyCredentialRequestOptions,
        credential_id: &str,
    ) -> Result<AssertionResponse> {
        handle_get_assertion(origin, options, credential_id, self.provider.as_ref(), &self.store)
    }

    /// [`MockCredentials::create`] on the blocking pool. Call from a tokio runtime.
    pub async fn create_async(
        &self,
        origin: String,
        options: PublicKeyCredentialCreationOptions,
    ) -> Result<RegistrationResponse> {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.create(&origin, &options))
            .await
            .map_err(|e| Error::Internal(e.to_string()))?
    }

    /// [`MockCredentials::get`] on the blocking pool. Call from a tokio runtime.
    pub async fn get_async(
        &self,
        origin: String,
        options: PublicKeyCredentialRequestOptions,
        credential_id: String,
    ) -> Result<AssertionResponse> {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.get(&origin, &options, &credential_id))
            .await
            .map_err(|e| Error::Internal(e.to_string()))?
    }

    pub fn credential_count(&self) -> usize {
        store::lock(&self.store).credential_count()
    }

    pub fn contains(&self, credential_id: &str) -> bool {
        store::lock(&self.store).contains(credential_id)
    }

    pub fn signature_counter(&self, credential_id: &str) -> Option<u32> {
        store::lock(&self.store)
            .get_by_id(credential_id)
            .map(|c| c.signature_counter())
    }
}
