use crate::config::PUBLIC_KEY_TYPE;
use crate::crypto::CryptoProvider;
use crate::encoding::{base64url, sha256};
use crate::error::Error;
use crate::store::{self, SharedStore};

use super::authenticator_data::{build_auth_data, flags};
use super::client_data::{CeremonyType, build_client_data};
use super::signature::encode_der_ecdsa;
use super::types::{
    AssertionResponse, AuthenticatorAssertionResponse, ClientExtensionResults,
    PublicKeyCredentialRequestOptions,
};

pub(crate) fn handle_get_assertion(
    origin: &str,
    options: &PublicKeyCredentialRequestOptions,
    credential_id: &str,
    provider: &dyn CryptoProvider,
    store: &SharedStore,
) -> Result<AssertionResponse, Error> {
    // The lock is held from lookup through signing so the signed counter is
    // the stored one and no two assertions share a value.
    let mut guard = store::lock(store);
    let cred = guard.get_mut_by_id(credential_id).ok_or_else(|| {
        tracing::warn!(cred_id = credential_id, "Unknown credential");
        Error::UnknownCredential(credential_id.to_string())
    })?;

    // Increment before building authData: the signature covers the new value.
    let counter = cred
        .next_signature_counter()
        .ok_or_else(|| Error::CounterExhausted(credential_id.to_string()))?;
    tracing::info!(cred_id = credential_id, count = counter, "Counter incremented");

    let client_data = build_client_data(CeremonyType::Get, &options.challenge, origin)?;
    let auth_data = build_auth_data(&options.rp_id, flags::UP, counter, None);
    let client_data_hash = sha256(&client_data);

    let mut to_sign = auth_data.clone();
    to_sign.extend_from_slice(&client_data_hash);
    let raw_sig = provider.sign(cred.signing_key(), &to_sign)?;
    let user_handle = cred.user_id().to_string();
    drop(guard);

    let der_sig = encode_der_ecdsa(&raw_sig);

    Ok(AssertionResponse {
        id: credential_id.to_string(),
        raw_id: credential_id.to_string(),
        response: AuthenticatorAssertionResponse {
            client_data_json: base64url(&client_data),
            authenticator_data: base64url(&auth_data),
            signature: base64url(&der_sig),
            user_handle,
        },
        client_extension_results: ClientExtensionResults::default(),
        type_: PUBLIC_KEY_TYPE.to_string(),
    })
}
