use crate::config::{AAGUID, ATTESTATION_NONE, CREDENTIAL_ID_LEN, PUBLIC_KEY_TYPE};
use crate::crypto::CryptoProvider;
use crate::encoding::base64url;
use crate::error::Error;
use crate::store::{self, CredentialRecord, SharedStore};

use super::attestation::build_attestation_object;
use super::authenticator_data::{build_attested_credential_data, build_auth_data, flags};
use super::client_data::{CeremonyType, build_client_data};
use super::types::{
    AuthenticatorAttestationResponse, ClientExtensionResults, PublicKeyCredentialCreationOptions,
    RegistrationResponse,
};

pub(crate) fn handle_make_credential(
    origin: &str,
    options: &PublicKeyCredentialCreationOptions,
    provider: &dyn CryptoProvider,
    store: &SharedStore,
) -> Result<RegistrationResponse, Error> {
    // 1. Only "none" attestation
    if options.attestation != ATTESTATION_NONE {
        tracing::warn!(attestation = %options.attestation, "Rejected attestation format");
        return Err(Error::UnsupportedAttestation(options.attestation.clone()));
    }

    // 2. clientDataJSON
    let client_data = build_client_data(CeremonyType::Create, &options.challenge, origin)?;

    // 3. Credential id and key pair
    let mut cred_id = [0u8; CREDENTIAL_ID_LEN];
    provider.fill_random(&mut cred_id)?;
    let signing_key = provider.generate_key()?;
    let (x, y) = provider.public_coords(&signing_key)?;

    // 4. authData with attested credential data, counter = 0
    let attested = build_attested_credential_data(&AAGUID, &cred_id, &x, &y)?;
    let auth_data = build_auth_data(&options.rp.id, flags::UP | flags::AT, 0, Some(&attested));
    tracing::debug!(len = auth_data.len(), "authData built");

    // 5. Attestation object
    let attestation_object = build_attestation_object(&auth_data)?;

    // 6. Store credential
    let credential_id = base64url(&cred_id);
    let record = CredentialRecord::new(cred_id.to_vec(), signing_key, options.user.id.clone());
    store::lock(store).add(credential_id.clone(), record);
    tracing::info!(cred_id = %credential_id, rp_id = %options.rp.id, "Credential created");

    Ok(RegistrationResponse {
        id: credential_id.clone(),
        raw_id: credential_id,
        response: AuthenticatorAttestationResponse {
            client_data_json: base64url(&client_data),
            attestation_object: base64url(&attestation_object),
        },
        client_extension_results: ClientExtensionResults::default(),
        type_: PUBLIC_KEY_TYPE.to_string(),
    })
}
