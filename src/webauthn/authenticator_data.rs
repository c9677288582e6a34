use crate::encoding::sha256_str;
use crate::error::Error;

use super::cose::encode_cose_key;

/// Authenticator data flag bits.
pub mod flags {
    /// Bit 0: user present.
    pub const UP: u8 = 0x01;
    /// Bit 6: set on creation only, together with the attested credential block.
    pub const AT: u8 = 0x40;
}

/// Length of rpIdHash + flags + signCount.
pub const AUTH_DATA_PREFIX_LEN: usize = 32 + 1 + 4;

/// rpIdHash || flags || signCount (big-endian) || attested credential data.
pub(crate) fn build_auth_data(
    rp_id: &str,
    flags: u8,
    sign_count: u32,
    attested_credential_data: Option<&[u8]>,
) -> Vec<u8> {
    let attested = attested_credential_data.unwrap_or_default();
    let mut data = Vec::with_capacity(AUTH_DATA_PREFIX_LEN + attested.len());
    data.extend_from_slice(&sha256_str(rp_id));
    data.push(flags);
    data.extend_from_slice(&sign_count.to_be_bytes());
    data.extend_from_slice(attested);
    data
}

/// aaguid || credentialIdLength (u16 big-endian) || credentialId || COSE_Key.
pub(crate) fn build_attested_credential_data(
    aaguid: &[u8; 16],
    credential_id: &[u8],
    public_key_x: &[u8; 32],
    public_key_y: &[u8; 32],
) -> Result<Vec<u8>, Error> {
    let cred_id_len = u16::try_from(credential_id.len()).map_err(|_| {
        Error::Internal(format!("credential id is {} bytes", credential_id.len()))
    })?;
    let cose_key = encode_cose_key(public_key_x, public_key_y)?;
    let mut data = Vec::with_capacity(16 + 2 + credential_id.len() + cose_key.len());
    data.extend_from_slice(aaguid);
    data.extend_from_slice(&cred_id_len.to_be_bytes());
    data.extend_from_slice(credential_id);
    data.extend_from_slice(&cose_key);
    Ok(data)
}
