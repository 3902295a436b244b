//! The GCM path, generic over any 16-byte-block primitive.

use generic_array::GenericArray;
use ghash::GHash;
use universal_hash::{KeyInit, UniversalHash};

use super::{Cipher, AEAD_IV_LEN, BLOCK_MAX};

impl Cipher {
    /// One-shot GCM transform over `data`. GHASH always accumulates the
    /// ciphertext, so decryption hashes before the XOR and encryption
    /// after it. The resulting tag lands in the context, truncated to the
    /// configured size.
    pub(super) fn gcm_transform(&mut self, data: &mut [u8], nonce: &[u8], aad: &[u8], decrypting: bool) {
        let hash_key = GenericArray::from_slice(&self.hash_key);

        // initial counter block
        let mut j0 = [0u8; BLOCK_MAX];
        if nonce.len() == AEAD_IV_LEN {
            j0[..AEAD_IV_LEN].copy_from_slice(nonce);
            j0[AEAD_IV_LEN..].copy_from_slice(&1u32.to_be_bytes());
        } else {
            let mut ghash = GHash::new(hash_key);
            ghash.update_padded(nonce);
            let mut lengths = [0u8; BLOCK_MAX];
            lengths[8..].copy_from_slice(&(nonce.len() as u64 * 8).to_be_bytes());
            ghash.update(&[lengths.into()]);
            j0.copy_from_slice(ghash.finalize().as_slice());
        }

        // tag seed E_K(J0)
        let mut seed = j0;
        self.primitive.encrypt_block(&mut seed);

        let mut ghash = GHash::new(hash_key);
        ghash.update_padded(aad);
        if decrypting {
            ghash.update_padded(data);
        }

        // keystream counter starts one past J0; only the low 32 bits wrap
        let mut counter = u32::from_be_bytes(j0[AEAD_IV_LEN..].try_into().unwrap());
        let mut counter_block = j0;
        for chunk in data.chunks_mut(BLOCK_MAX) {
            counter = counter.wrapping_add(1);
            counter_block[AEAD_IV_LEN..].copy_from_slice(&counter.to_be_bytes());
            let mut keystream = counter_block;
            self.primitive.encrypt_block(&mut keystream);
            for (byte, key) in chunk.iter_mut().zip(keystream.iter()) {
                *byte ^= *key;
            }
        }

        if !decrypting {
            ghash.update_padded(data);
        }

        let mut lengths = [0u8; BLOCK_MAX];
        lengths[..8].copy_from_slice(&(aad.len() as u64 * 8).to_be_bytes());
        lengths[8..].copy_from_slice(&(data.len() as u64 * 8).to_be_bytes());
        ghash.update(&[lengths.into()]);
        let digest = ghash.finalize();

        for (tag, (seed, digest)) in self
            .tag
            .iter_mut()
            .zip(seed.iter().zip(digest.as_slice().iter()))
        {
            *tag = seed ^ digest;
        }
    }
}
