use cipher::{
    consts::{U16, U8},
    BlockDecrypt, BlockEncrypt, KeyInit, StreamCipher,
};
use generic_array::GenericArray;

use crate::Algorithm;

mod chacha;
mod salsa20;
mod xtea;

pub(crate) use chacha::ChaCha;
pub(crate) use salsa20::Salsa20;
pub(crate) use xtea::Xtea;

/// One keyed primitive state. Block variants answer `encrypt_block` /
/// `decrypt_block` over their native block size; stream variants answer
/// `apply_keystream`. Exactly one of the two families applies to any
/// variant.
#[allow(clippy::large_enum_variant)]
pub(crate) enum Primitive {
    Aes128(aes::Aes128),
    Aes192(aes::Aes192),
    Aes256(aes::Aes256),
    Aria128(aria::Aria128),
    Aria192(aria::Aria192),
    Aria256(aria::Aria256),
    Blowfish(blowfish::Blowfish),
    Camellia128(camellia::Camellia128),
    Camellia192(camellia::Camellia192),
    Camellia256(camellia::Camellia256),
    Des(des::Des),
    TdesEde3(des::TdesEde3),
    Twofish(twofish::Twofish),
    Xtea(Xtea),
    Rc4Key64(rc4::Rc4<U8>),
    Rc4Key128(rc4::Rc4<U16>),
    Salsa20(Salsa20),
    ChaCha(ChaCha),
}

impl Primitive {
    /// Builds the keyed state for `algorithm`. The context validates the key
    /// length before dispatching here; stream primitives also consume the
    /// optional IV and starting counter.
    pub(crate) fn for_algorithm(
        algorithm: Algorithm,
        key: &[u8],
        iv: Option<&[u8]>,
        counter: u32,
    ) -> Self {
        use Algorithm::*;
        // new_from_slice is infallible here: the context has already
        // checked the key length against the catalog
        match algorithm {
            Aes128Ecb | Aes128Cbc | Aes128Ctr | Aes128Gcm => {
                Self::Aes128(aes::Aes128::new_from_slice(key).unwrap())
            }
            Aes192Ecb | Aes192Cbc | Aes192Ctr | Aes192Gcm => {
                Self::Aes192(aes::Aes192::new_from_slice(key).unwrap())
            }
            Aes256Ecb | Aes256Cbc | Aes256Ctr | Aes256Gcm => {
                Self::Aes256(aes::Aes256::new_from_slice(key).unwrap())
            }
            Aria128Ecb | Aria128Cbc | Aria128Ctr | Aria128Gcm => {
                Self::Aria128(aria::Aria128::new_from_slice(key).unwrap())
            }
            Aria192Ecb | Aria192Cbc | Aria192Ctr | Aria192Gcm => {
                Self::Aria192(aria::Aria192::new_from_slice(key).unwrap())
            }
            Aria256Ecb | Aria256Cbc | Aria256Ctr | Aria256Gcm => {
                Self::Aria256(aria::Aria256::new_from_slice(key).unwrap())
            }
            Blowfish128Ecb | Blowfish128Cbc => {
                Self::Blowfish(blowfish::Blowfish::new_from_slice(key).unwrap())
            }
            Camellia128Ecb | Camellia128Cbc | Camellia128Ctr | Camellia128Gcm => {
                Self::Camellia128(camellia::Camellia128::new_from_slice(key).unwrap())
            }
            Camellia192Ecb | Camellia192Cbc | Camellia192Ctr | Camellia192Gcm => {
                Self::Camellia192(camellia::Camellia192::new_from_slice(key).unwrap())
            }
            Camellia256Ecb | Camellia256Cbc | Camellia256Ctr | Camellia256Gcm => {
                Self::Camellia256(camellia::Camellia256::new_from_slice(key).unwrap())
            }
            DesEcb | DesCbc => Self::Des(des::Des::new_from_slice(key).unwrap()),
            DesEde3Ecb | DesEde3Cbc => Self::TdesEde3(des::TdesEde3::new_from_slice(key).unwrap()),
            Twofish128Ecb | Twofish128Cbc | Twofish128Ctr | Twofish128Gcm | Twofish192Ecb
            | Twofish192Cbc | Twofish192Ctr | Twofish192Gcm | Twofish256Ecb | Twofish256Cbc
            | Twofish256Ctr | Twofish256Gcm => {
                Self::Twofish(twofish::Twofish::new_from_slice(key).unwrap())
            }
            Xtea128Ecb | Xtea128Cbc => Self::Xtea(Xtea::new(key)),
            Rc4Key64 => Self::Rc4Key64(rc4::Rc4::new_from_slice(key).unwrap()),
            Rc4Key128 => Self::Rc4Key128(rc4::Rc4::new_from_slice(key).unwrap()),
            Salsa20Key128 | Salsa20Key256 => Self::Salsa20(Salsa20::new(key, iv)),
            ChaCha8Key128 | ChaCha8Key256 => Self::ChaCha(ChaCha::new(key, 8, iv)),
            ChaCha12Key128 | ChaCha12Key256 => Self::ChaCha(ChaCha::new(key, 12, iv)),
            ChaCha20Key128 | ChaCha20Key256 => Self::ChaCha(ChaCha::new(key, 20, iv)),
            ChaCha20Ietf => Self::ChaCha(ChaCha::new_ietf(key, iv, counter)),
            // the AEAD composition supplies nonce and counter per message
            ChaCha20Poly1305 => Self::ChaCha(ChaCha::new_ietf(key, None, 0)),
        }
    }

    pub(crate) fn encrypt_block(&self, block: &mut [u8]) {
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes192(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes256(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aria128(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aria192(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aria256(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Blowfish(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Camellia128(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Camellia192(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Camellia256(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Des(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::TdesEde3(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Twofish(cipher) => cipher.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Xtea(cipher) => cipher.encrypt_block(block),
            Self::Rc4Key64(_) | Self::Rc4Key128(_) | Self::Salsa20(_) | Self::ChaCha(_) => {
                unreachable!("block operation dispatched to a stream primitive\nthis is a bug!")
            }
        }
    }

    pub(crate) fn decrypt_block(&self, block: &mut [u8]) {
        match self {
            Self::Aes128(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes192(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes256(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aria128(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aria192(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aria256(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Blowfish(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Camellia128(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Camellia192(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Camellia256(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Des(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::TdesEde3(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Twofish(cipher) => cipher.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Xtea(cipher) => cipher.decrypt_block(block),
            Self::Rc4Key64(_) | Self::Rc4Key128(_) | Self::Salsa20(_) | Self::ChaCha(_) => {
                unreachable!("block operation dispatched to a stream primitive\nthis is a bug!")
            }
        }
    }

    pub(crate) fn apply_keystream(&mut self, data: &mut [u8]) {
        match self {
            Self::Rc4Key64(cipher) => cipher.apply_keystream(data),
            Self::Rc4Key128(cipher) => cipher.apply_keystream(data),
            Self::Salsa20(cipher) => cipher.process_mut(data),
            Self::ChaCha(cipher) => cipher.process_mut(data),
            _ => unreachable!("keystream operation dispatched to a block primitive\nthis is a bug!"),
        }
    }
}
