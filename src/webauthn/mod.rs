pub(crate) mod attestation;
pub mod authenticator_data;
pub(crate) mod client_data;
pub mod cose;
pub(crate) mod get_assertion;
pub(crate) mod make_credential;
pub(crate) mod signature;
pub mod types;
