//! The RFC 7539 ChaCha20-Poly1305 composition.

use generic_array::GenericArray;
use poly1305::Poly1305;
use universal_hash::{KeyInit, UniversalHash};
use zeroize::Zeroize;

use crate::primitive::Primitive;

use super::Cipher;

impl Cipher {
    /// One-shot seal/open. The stream is re-keyed with the message nonce at
    /// counter 0; the first keystream block yields the one-time Poly1305
    /// key, so the payload starts at counter 1. The MAC covers
    /// `aad ‖ pad16 ‖ ciphertext ‖ pad16 ‖ le64(aad len) ‖ le64(ct len)`
    /// and is always computed over the ciphertext, before decrypting or
    /// after encrypting.
    pub(super) fn chacha20poly1305_transform(
        &mut self,
        data: &mut [u8],
        nonce: &[u8],
        aad: &[u8],
        decrypting: bool,
    ) {
        let Primitive::ChaCha(stream) = &mut self.primitive else {
            unreachable!("ChaCha20-Poly1305 context without a ChaCha primitive\nthis is a bug!")
        };
        stream.reseed_ietf(nonce, 0);

        let mut one_time_key = [0u8; 64];
        stream.process_mut(&mut one_time_key);

        if !decrypting {
            stream.process_mut(data);
        }

        let mut mac = Poly1305::new(GenericArray::from_slice(&one_time_key[..32]));
        mac.update_padded(aad);
        mac.update_padded(data);
        let mut lengths = [0u8; 16];
        lengths[..8].copy_from_slice(&(aad.len() as u64).to_le_bytes());
        lengths[8..].copy_from_slice(&(data.len() as u64).to_le_bytes());
        mac.update(&[lengths.into()]);
        self.tag.copy_from_slice(mac.finalize().as_slice());

        if decrypting {
            stream.process_mut(data);
        }

        one_time_key.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Cipher};

    const SUNSCREEN: &[u8] = b"Ladies and Gentlemen of the class of '99: \
If I could offer you only one tip for the future, sunscreen would be it.";

    fn rfc7539_parts() -> (alloc::vec::Vec<u8>, alloc::vec::Vec<u8>, alloc::vec::Vec<u8>) {
        let key = hex::decode("808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f")
            .unwrap();
        let nonce = hex::decode("070000004041424344454647").unwrap();
        let aad = hex::decode("50515253c0c1c2c3c4c5c6c7").unwrap();
        (key, nonce, aad)
    }

    #[test]
    fn rfc7539_seal() {
        let (key, nonce, aad) = rfc7539_parts();
        let mut cipher = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
        let mut ct = alloc::vec![0u8; SUNSCREEN.len()];
        let n = cipher.encrypt_aead(&mut ct, SUNSCREEN, &nonce, &aad).unwrap();
        assert_eq!(n, 114);
        assert_eq!(
            hex::encode(&ct),
            "d31a8d34648e60db7b86afbc53ef7ec2a4aded51296e08fea9e2b5a736ee62d6\
             3dbea45e8ca9671282fafb69da92728b1a71de0a9e060b2905d6a5b67ecd3b36\
             92ddbd7f2d778b8c9803aee328091b58fab324e4fad675945585808b4831d7bc\
             3ff4def08e4b7a9de576d26586cec64b6116"
        );
        assert_eq!(hex::encode(cipher.tag()), "1ae10b594f09e26a7e902ecbd0600691");
    }

    #[test]
    fn rfc7539_open() {
        let (key, nonce, aad) = rfc7539_parts();
        let mut cipher = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
        let mut ct = alloc::vec![0u8; SUNSCREEN.len()];
        cipher.encrypt_aead(&mut ct, SUNSCREEN, &nonce, &aad).unwrap();
        let tag = cipher.tag().to_vec();

        // the tag is recomputed over the ciphertext before decryption
        let mut opener = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
        let mut pt = alloc::vec![0u8; ct.len()];
        opener.decrypt_aead(&mut pt, &ct, &nonce, &aad).unwrap();
        assert_eq!(pt, SUNSCREEN);
        assert!(opener.verify_tag(&tag));

        // a corrupted ciphertext still decrypts but fails verification
        let mut corrupt = ct.clone();
        corrupt[40] ^= 0x20;
        let mut opener = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
        opener.decrypt_aead(&mut pt, &corrupt, &nonce, &aad).unwrap();
        assert!(!opener.verify_tag(&tag));
    }

    #[test]
    fn nonce_must_be_96_bits() {
        let key = [0u8; 32];
        let mut cipher = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
        let mut data = [0u8; 4];
        assert!(cipher
            .encrypt_aead_in_place(&mut data, &[0u8; 8], b"")
            .is_err());
        assert!(cipher
            .encrypt_aead_in_place(&mut data, &[0u8; 12], b"")
            .is_ok());
    }

    #[test]
    fn tag_is_fixed_at_16() {
        let key = [0u8; 32];
        let mut cipher = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
        assert!(cipher.set_tag_size(12).is_err());
        assert!(cipher.set_tag_size(16).is_ok());
    }
}
