use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CeremonyType {
    Create,
    Get,
}

impl CeremonyType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Create => "webauthn.create",
            Self::Get => "webauthn.get",
        }
    }
}

// Field order is the serialization order.
#[derive(Serialize)]
struct CollectedClientData<'a> {
    #[serde(rename = "type")]
    type_: &'static str,
    challenge: &'a str,
    origin: &'a str,
}

/// Compact UTF-8 JSON `{"type":..,"challenge":..,"origin":..}`. These exact
/// bytes are hashed and returned, so the output must never be reformatted.
pub(crate) fn build_client_data(
    ceremony: CeremonyType,
    challenge: &str,
    origin: &str,
) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&CollectedClientData {
        type_: ceremony.as_str(),
        challenge,
        origin,
    })
}
