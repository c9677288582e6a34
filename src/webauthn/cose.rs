use ciborium::value::Value;

use crate::error::Error;

// COSE_Key map labels (RFC 9052 / RFC 9053).
pub const LABEL_KTY: i64 = 1;
pub const LABEL_ALG: i64 = 3;
pub const LABEL_CRV: i64 = -1;
pub const LABEL_X: i64 = -2;
pub const LABEL_Y: i64 = -3;

/// Key type: elliptic curve with x and y coordinates.
pub const KTY_EC2: i64 = 2;
/// ECDSA with SHA-256.
pub const ALG_ES256: i64 = -7;
pub const CRV_P256: i64 = 1;

/// Encode a P-256 public key as a COSE_Key CBOR map (kty, alg, crv, x, y in that order).
pub(crate) fn encode_cose_key(x: &[u8; 32], y: &[u8; 32]) -> Result<Vec<u8>, Error> {
    let map = Value::Map(vec![
        (Value::Integer(LABEL_KTY.into()), Value::Integer(KTY_EC2.into())),
        (Value::Integer(LABEL_ALG.into()), Value::Integer(ALG_ES256.into())),
        (Value::Integer(LABEL_CRV.into()), Value::Integer(CRV_P256.into())),
        (Value::Integer(LABEL_X.into()), Value::Bytes(x.to_vec())),
        (Value::Integer(LABEL_Y.into()), Value::Bytes(y.to_vec())),
    ]);
    let mut buf = Vec::new();
    ciborium::into_writer(&map, &mut buf).map_err(|e| Error::Cbor(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cose_key_is_cbor_map() {
        let encoded = encode_cose_key(&[0x11u8; 32], &[0x22u8; 32]).unwrap();
        let val: Value = ciborium::from_reader(encoded.as_slice()).expect("must be valid CBOR");
        assert!(matches!(val, Value::Map(_)), "COSE key must be a CBOR map");
    }

    #[test]
    fn test_cose_key_fields_in_order() {
        let encoded = encode_cose_key(&[0xAAu8; 32], &[0xBBu8; 32]).unwrap();
        let Value::Map(map) = ciborium::from_reader::<Value, _>(encoded.as_slice()).unwrap() else {
            panic!("not a map")
        };

        let keys: Vec<i128> = map
            .iter()
            .map(|(k, _)| match k {
                Value::Integer(i) => i128::from(*i),
                other => panic!("non-integer label {other:?}"),
            })
            .collect();
        assert_eq!(keys, vec![1, 3, -1, -2, -3]);

        assert!(matches!(&map[0].1, Value::Integer(i) if i128::from(*i) == 2));
        assert!(matches!(&map[1].1, Value::Integer(i) if i128::from(*i) == -7));
        assert!(matches!(&map[2].1, Value::Integer(i) if i128::from(*i) == 1));
        assert!(matches!(&map[3].1, Value::Bytes(b) if b == &[0xAAu8; 32]));
        assert!(matches!(&map[4].1, Value::Bytes(b) if b == &[0xBBu8; 32]));
    }

    #[test]
    fn test_cose_key_prefix_bytes() {
        // map(5), 1: 2, 3: -7, -1: 1, -2: bstr(32)
        let encoded = encode_cose_key(&[0u8; 32], &[0u8; 32]).unwrap();
        assert_eq!(&encoded[..10], &[0xA5, 0x01, 0x02, 0x03, 0x26, 0x20, 0x01, 0x21, 0x58, 0x20]);
        assert_eq!(encoded.len(), 10 + 32 + 3 + 32);
    }
}
