/// DER-encode a raw 64-byte P-256 ECDSA signature (r || s) as
/// `SEQUENCE { INTEGER r, INTEGER s }`.
pub(crate) fn encode_der_ecdsa(raw: &[u8; 64]) -> Vec<u8> {
    let r_der = der_integer(&raw[0..32]);
    let s_der = der_integer(&raw[32..64]);
    // At most 2 * (2 + 33) bytes, so the short length form always fits.
    let inner_len = (r_der.len() + s_der.len()) as u8;
    let mut out = Vec::with_capacity(2 + inner_len as usize);
    out.push(0x30);
    out.push(inner_len);
    out.extend_from_slice(&r_der);
    out.extend_from_slice(&s_der);
    out
}

/// Minimal unsigned INTEGER: leading zeros stripped, one 0x00 kept for zero,
/// and a 0x00 prepended when the high bit would read as negative.
fn der_integer(n: &[u8]) -> Vec<u8> {
    let start = n.iter().position(|&b| b != 0).unwrap_or(n.len());
    let n = if start == n.len() { &[0u8][..] } else { &n[start..] };
    let pad = n[0] & 0x80 != 0;
    let mut out = Vec::with_capacity(3 + n.len());
    out.push(0x02);
    out.push(n.len() as u8 + pad as u8);
    if pad {
        out.push(0);
    }
    out.extend_from_slice(n);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::Signature;

    #[test]
    fn test_der_ecdsa_structure() {
        let mut raw = [0u8; 64];
        raw[0] = 0x01;
        raw[32] = 0x01;
        let der = encode_der_ecdsa(&raw);
        assert_eq!(der[0], 0x30, "must start with SEQUENCE tag 0x30");
        assert_eq!(der.len(), 2 + der[1] as usize, "DER length field must be accurate");
        assert_eq!(der[2], 0x02, "r must start with INTEGER tag 0x02");
        assert_eq!(der[3], 32);
        assert_eq!(der[4 + 32], 0x02, "s must start with INTEGER tag 0x02");
    }

    #[test]
    fn test_der_ecdsa_all_zeros_encodes_as_single_zero() {
        let der = encode_der_ecdsa(&[0u8; 64]);
        assert_eq!(der, vec![0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00]);
    }

    #[test]
    fn test_der_ecdsa_high_bit_in_first_byte() {
        let mut raw = [0u8; 64];
        raw[0] = 0x80;
        raw[63] = 0x01;
        let der = encode_der_ecdsa(&raw);
        assert_eq!(der[2], 0x02);
        assert_eq!(der[3], 33, "padded r must be 33 bytes");
        assert_eq!(der[4], 0x00, "must be padded with 0x00 prefix");
        assert_eq!(der[5], 0x80);
        assert_eq!(&der[4 + 33..], &[0x02, 0x01, 0x01]);
        assert_eq!(der[1] as usize, der.len() - 2);
    }

    #[test]
    fn test_der_ecdsa_high_bit_after_leading_zeros() {
        let mut raw = [0u8; 64];
        raw[31] = 0x80;
        raw[63] = 0x01;
        let der = encode_der_ecdsa(&raw);
        assert_eq!(&der[2..6], &[0x02, 0x02, 0x00, 0x80]);
    }

    #[test]
    fn test_der_ecdsa_leading_zeros_stripped() {
        let mut raw = [0u8; 64];
        raw[30] = 0x01;
        raw[31] = 0xFF;
        raw[63] = 0x7F;
        let der = encode_der_ecdsa(&raw);
        assert_eq!(der, vec![0x30, 0x07, 0x02, 0x02, 0x01, 0xFF, 0x02, 0x01, 0x7F]);
    }

    #[test]
    fn test_der_ecdsa_parses_back_to_same_scalars() {
        let mut raw = [0u8; 64];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(0x90);
        }
        raw[32] = 0x00;
        raw[33] = 0x05;
        let der = encode_der_ecdsa(&raw);
        let parsed = Signature::from_der(&der).expect("must be valid DER");
        assert_eq!(parsed.to_bytes().as_slice(), &raw[..]);
    }
}
