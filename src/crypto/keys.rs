use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use rand::RngCore;
use rand::rngs::OsRng;

use super::{CryptoError, CryptoProvider};

/// In-process provider backed by the OS RNG and the `p256` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareProvider;

impl CryptoProvider for SoftwareProvider {
    fn fill_random(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| CryptoError::Random(e.to_string()))
    }

    fn generate_key(&self) -> Result<SigningKey, CryptoError> {
        Ok(SigningKey::random(&mut OsRng))
    }

    fn sign(&self, key: &SigningKey, message: &[u8]) -> Result<[u8; 64], CryptoError> {
        let sig = Signer::<Signature>::try_sign(key, message)
            .map_err(|e| CryptoError::Signing(e.to_string()))?;
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&sig.to_bytes());
        Ok(raw)
    }

    fn public_coords(&self, key: &SigningKey) -> Result<([u8; 32], [u8; 32]), CryptoError> {
        let point = key.verifying_key().to_encoded_point(false);
        let x = point
            .x()
            .ok_or_else(|| CryptoError::KeyExport("public key is the identity point".into()))?;
        let y = point
            .y()
            .ok_or_else(|| CryptoError::KeyExport("public key is compressed".into()))?;
        Ok((fixed_coordinate(x)?, fixed_coordinate(y)?))
    }
}

/// Left-pad a big-endian coordinate to 32 bytes. Never truncates.
pub fn fixed_coordinate(bytes: &[u8]) -> Result<[u8; 32], CryptoError> {
    if bytes.len() > 32 {
        return Err(CryptoError::KeyExport(format!(
            "coordinate is {} bytes, expected at most 32",
            bytes.len()
        )));
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::signature::Verifier;
    use p256::ecdsa::VerifyingKey;

    #[test]
    fn test_fixed_coordinate_pads_short_input() {
        let out = fixed_coordinate(&[0xAB, 0xCD]).unwrap();
        assert_eq!(&out[..30], &[0u8; 30]);
        assert_eq!(&out[30..], &[0xAB, 0xCD]);
    }

    #[test]
    fn test_fixed_coordinate_keeps_full_width() {
        let x = [0x5Au8; 32];
        assert_eq!(fixed_coordinate(&x).unwrap(), x);
    }

    #[test]
    fn test_fixed_coordinate_rejects_oversized() {
        assert!(matches!(
            fixed_coordinate(&[1u8; 33]),
            Err(CryptoError::KeyExport(_))
        ));
    }

    #[test]
    fn test_fill_random_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        SoftwareProvider.fill_random(&mut a).unwrap();
        SoftwareProvider.fill_random(&mut b).unwrap();
        assert_ne!(a, b, "two 256-bit draws must differ");
    }

    #[test]
    fn test_raw_signature_verifies_with_exported_coords() {
        let provider = SoftwareProvider;
        let key = provider.generate_key().unwrap();
        let (x, y) = provider.public_coords(&key).unwrap();
        let raw = provider.sign(&key, b"payload").unwrap();

        let point = p256::EncodedPoint::from_affine_coordinates(&x.into(), &y.into(), false);
        let vk = VerifyingKey::from_encoded_point(&point).unwrap();
        let sig = Signature::from_slice(&raw).unwrap();
        vk.verify(b"payload", &sig).expect("signature must verify");
        assert!(vk.verify(b"other payload", &sig).is_err());
    }
}
