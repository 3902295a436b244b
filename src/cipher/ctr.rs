//! The CTR path: RFC 3686-style counter blocks, one per 16 bytes of
//! keystream.

use super::{Cipher, BLOCK_MAX, CTR_IV_LEN};

impl Cipher {
    /// Encryption and decryption are the same XOR. The counter lives in the
    /// context, so consecutive calls continue the keystream.
    pub(super) fn ctr_transform(&mut self, data: &mut [u8]) {
        let mut block = [0u8; BLOCK_MAX];
        for chunk in data.chunks_mut(self.block_len) {
            block[..CTR_IV_LEN].copy_from_slice(&self.chain[..CTR_IV_LEN]);
            block[CTR_IV_LEN..].copy_from_slice(&self.counter.to_be_bytes());
            self.counter = self.counter.wrapping_add(1);
            self.primitive.encrypt_block(&mut block);
            for (byte, key) in chunk.iter_mut().zip(block.iter()) {
                *byte ^= *key;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Cipher};

    fn ctr(algorithm: Algorithm, key: &[u8], iv: &[u8]) -> Cipher {
        Cipher::with_counter(algorithm, key, Some(iv), 1).unwrap()
    }

    #[test]
    fn aes_128_rfc3686_vector_1() {
        let key = hex::decode("ae6852f8121067cc4bf7a5765577f39e").unwrap();
        let iv = hex::decode("000000300000000000000000").unwrap();
        let mut cipher = ctr(Algorithm::Aes128Ctr, &key, &iv);
        let mut data = *b"Single block msg";
        cipher.encrypt_in_place(&mut data, 16).unwrap();
        assert_eq!(hex::encode(data), "e4095d4fb7a7b3792d6175a3261311b8");

        let mut cipher = ctr(Algorithm::Aes128Ctr, &key, &iv);
        cipher.decrypt_in_place(&mut data).unwrap();
        assert_eq!(&data, b"Single block msg");
    }

    #[test]
    fn aes_128_rfc3686_vector_2() {
        let key = hex::decode("7e24067817fae0d743d6ce1f32539163").unwrap();
        let iv = hex::decode("006cb6dbc0543b59da48d90b").unwrap();
        let plain: alloc::vec::Vec<u8> = (0u8..32).collect();
        let mut cipher = ctr(Algorithm::Aes128Ctr, &key, &iv);
        let mut ct = [0u8; 32];
        cipher.encrypt(&mut ct, &plain).unwrap();
        assert_eq!(
            hex::encode(ct),
            "5104a106168a72d9790d41ee8edad388eb2e1efc46da57c8fce630df9141be28"
        );
    }

    #[test]
    fn camellia_192_rfc5528() {
        let key = hex::decode("16af5b145fc9f579c175f93e3bfb0eed863d06ccfdb78515").unwrap();
        let iv = hex::decode("0000004836733c147d6d93cb").unwrap();
        let mut cipher = ctr(Algorithm::Camellia192Ctr, &key, &iv);
        let mut data = *b"Single block msg";
        cipher.encrypt_in_place(&mut data, 16).unwrap();
        assert_eq!(hex::encode(data), "2379399e8a8d2b2b16702fc78b9e9696");
    }

    #[test]
    fn counter_continues_across_calls() {
        // one 36-byte call equals a 16-byte call followed by a 20-byte call
        let key = [0x5au8; 32];
        let iv = [0xa5u8; 12];
        let plain = [0x33u8; 36];

        let mut whole = plain;
        ctr(Algorithm::Aes256Ctr, &key, &iv)
            .encrypt_in_place(&mut whole, 36)
            .unwrap();

        let mut split = plain;
        let mut cipher = ctr(Algorithm::Aes256Ctr, &key, &iv);
        let (head, tail) = split.split_at_mut(16);
        cipher.encrypt_in_place(head, 16).unwrap();
        cipher.encrypt_in_place(tail, 20).unwrap();
        assert_eq!(whole, split);
    }

    #[test]
    fn self_inverse_with_fresh_context() {
        let key = [0x10u8; 24];
        let iv = [0x20u8; 12];
        let plain = *b"counter mode is an involution when re-keyed alike";

        let mut data = plain;
        ctr(Algorithm::Twofish192Ctr, &key, &iv)
            .encrypt_in_place(&mut data, plain.len())
            .unwrap();
        assert_ne!(data, plain);
        ctr(Algorithm::Twofish192Ctr, &key, &iv)
            .encrypt_in_place(&mut data, plain.len())
            .unwrap();
        assert_eq!(data, plain);
    }

    #[test]
    fn counter_wraps_modulo_2_32() {
        let key = [1u8; 16];
        let iv = [2u8; 12];
        let mut a = Cipher::with_counter(Algorithm::Aria128Ctr, &key, Some(&iv), u32::MAX).unwrap();
        let mut one = [0u8; 32];
        a.encrypt_in_place(&mut one, 32).unwrap();

        // second block of the wrap-around run equals a counter-0 run
        let mut b = Cipher::with_counter(Algorithm::Aria128Ctr, &key, Some(&iv), 0).unwrap();
        let mut zero = [0u8; 16];
        b.encrypt_in_place(&mut zero, 16).unwrap();
        assert_eq!(one[16..], zero);
    }
}
