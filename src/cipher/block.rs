//! The ECB/CBC paths of the engine.

use crate::{
    error::{DecryptError, EncryptError},
    Mode, Padding,
};

use super::{Cipher, BLOCK_MAX};

impl Cipher {
    pub(super) fn block_encrypt_in_place(
        &mut self,
        data: &mut [u8],
        len: usize,
    ) -> Result<usize, EncryptError> {
        let block_len = self.block_len;
        let full = len / block_len;
        let rem = len % block_len;
        let mut written = full * block_len;
        let needed = if self.padding == Padding::None {
            written
        } else {
            written + block_len
        };
        if data.len() < needed {
            return Err(EncryptError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }

        for i in 0..full {
            self.encrypt_block_chained(&mut data[i * block_len..(i + 1) * block_len]);
        }

        if self.padding != Padding::None {
            // the remainder stays where it is; the pad bytes complete the block
            let start = full * block_len;
            let padding = self.padding;
            padding.fill(&mut data[start..start + block_len], rem);
            self.encrypt_block_chained(&mut data[start..start + block_len]);
            written += block_len;
        }

        Ok(written)
    }

    fn encrypt_block_chained(&mut self, block: &mut [u8]) {
        if self.mode == Mode::Cbc {
            for (byte, chained) in block.iter_mut().zip(self.chain.iter()) {
                *byte ^= *chained;
            }
            self.primitive.encrypt_block(block);
            self.chain[..block.len()].copy_from_slice(block);
        } else {
            self.primitive.encrypt_block(block);
        }
    }

    pub(super) fn block_decrypt_in_place(&mut self, data: &mut [u8]) -> Result<usize, DecryptError> {
        let block_len = self.block_len;
        // a trailing partial block is ignored
        let blocks = data.len() / block_len;
        let mut tmp = [0u8; BLOCK_MAX];

        for i in 0..blocks {
            let block = &mut data[i * block_len..(i + 1) * block_len];
            if self.mode == Mode::Cbc {
                tmp[..block_len].copy_from_slice(block);
                self.primitive.decrypt_block(block);
                for (byte, chained) in block.iter_mut().zip(self.chain.iter()) {
                    *byte ^= *chained;
                }
                self.chain[..block_len].copy_from_slice(&tmp[..block_len]);
            } else {
                self.primitive.decrypt_block(block);
            }
        }

        let mut produced = blocks * block_len;
        if self.padding != Padding::None && blocks > 0 {
            match self.padding.strip(&data[produced - block_len..produced]) {
                Some(pad) => produced -= pad,
                None => return Err(DecryptError::Padding),
            }
        }

        Ok(produced)
    }
}
