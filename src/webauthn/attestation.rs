use ciborium::value::Value;

use crate::config::ATTESTATION_NONE;
use crate::error::Error;

/// Build the "none" attestation object: `{fmt: "none", attStmt: {}, authData}`.
pub(crate) fn build_attestation_object(auth_data: &[u8]) -> Result<Vec<u8>, Error> {
    let map = Value::Map(vec![
        (
            Value::Text("fmt".to_string()),
            Value::Text(ATTESTATION_NONE.to_string()),
        ),
        (Value::Text("attStmt".to_string()), Value::Map(vec![])),
        (
            Value::Text("authData".to_string()),
            Value::Bytes(auth_data.to_vec()),
        ),
    ]);
    let mut buf = Vec::new();
    ciborium::into_writer(&map, &mut buf).map_err(|e| Error::Cbor(e.to_string()))?;
    Ok(buf)
}
