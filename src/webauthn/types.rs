//! Request and response shapes, in the JSON form a relying party emits and
//! `PublicKeyCredential.toJSON()` returns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelyingParty {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user handle, echoed verbatim on every assertion.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKeyCredParam {
    pub alg: i64,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptions {
    pub rp: RelyingParty,
    pub user: User,
    pub challenge: String,
    #[serde(default)]
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// Absent deserializes to "" and is rejected like any other non-"none" value.
    #[serde(default)]
    pub attestation: String,
}

impl PublicKeyCredentialCreationOptions {
    /// ES256-only options requesting "none" attestation.
    pub fn new(
        rp_id: impl Into<String>,
        user_id: impl Into<String>,
        challenge: impl Into<String>,
    ) -> Self {
        Self {
            rp: RelyingParty { id: rp_id.into(), name: None },
            user: User { id: user_id.into(), name: None, display_name: None },
            challenge: challenge.into(),
            pub_key_cred_params: vec![PubKeyCredParam {
                alg: crate::webauthn::cose::ALG_ES256,
                type_: crate::config::PUBLIC_KEY_TYPE.to_string(),
            }],
            timeout: None,
            attestation: crate::config::ATTESTATION_NONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRequestOptions {
    pub rp_id: String,
    pub challenge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}

impl PublicKeyCredentialRequestOptions {
    pub fn new(rp_id: impl Into<String>, challenge: impl Into<String>) -> Self {
        Self {
            rp_id: rp_id.into(),
            challenge: challenge.into(),
            timeout: None,
            user_verification: None,
        }
    }
}

/// Always `{}`: no extensions are processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientExtensionResults {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAttestationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub attestation_object: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: String,
    pub raw_id: String,
    pub response: AuthenticatorAttestationResponse,
    pub client_extension_results: ClientExtensionResults,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAssertionResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub authenticator_data: String,
    pub signature: String,
    pub user_handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResponse {
    pub id: String,
    pub raw_id: String,
    pub response: AuthenticatorAssertionResponse,
    pub client_extension_results: ClientExtensionResults,
    #[serde(rename = "type")]
    pub type_: String,
}
