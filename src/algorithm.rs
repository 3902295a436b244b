use core::str::FromStr;

use alloc::{string::ToString, vec, vec::Vec};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{error::InvalidAlgorithmError, Mode};

/// The closed catalog of `{cipher family, key size, mode}` combinations the
/// engine supports.
///
/// Every variant carries a canonical short name (`"AES-128-CBC"`,
/// `"CHACHA20-POLY1305-AEAD"`, ...) used by [`Algorithm::name`],
/// [`Algorithm::from_name`] and the serde representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, Display, EnumIter,
)]
pub enum Algorithm {
    // AES (FIPS-197)
    #[serde(rename = "AES-128-ECB")]
    #[strum(serialize = "AES-128-ECB")]
    Aes128Ecb,
    #[serde(rename = "AES-192-ECB")]
    #[strum(serialize = "AES-192-ECB")]
    Aes192Ecb,
    #[serde(rename = "AES-256-ECB")]
    #[strum(serialize = "AES-256-ECB")]
    Aes256Ecb,
    #[serde(rename = "AES-128-CBC")]
    #[strum(serialize = "AES-128-CBC")]
    Aes128Cbc,
    #[serde(rename = "AES-192-CBC")]
    #[strum(serialize = "AES-192-CBC")]
    Aes192Cbc,
    #[serde(rename = "AES-256-CBC")]
    #[strum(serialize = "AES-256-CBC")]
    Aes256Cbc,
    #[serde(rename = "AES-128-CTR")]
    #[strum(serialize = "AES-128-CTR")]
    Aes128Ctr,
    #[serde(rename = "AES-192-CTR")]
    #[strum(serialize = "AES-192-CTR")]
    Aes192Ctr,
    #[serde(rename = "AES-256-CTR")]
    #[strum(serialize = "AES-256-CTR")]
    Aes256Ctr,
    #[serde(rename = "AES-128-GCM")]
    #[strum(serialize = "AES-128-GCM")]
    Aes128Gcm,
    #[serde(rename = "AES-192-GCM")]
    #[strum(serialize = "AES-192-GCM")]
    Aes192Gcm,
    #[serde(rename = "AES-256-GCM")]
    #[strum(serialize = "AES-256-GCM")]
    Aes256Gcm,

    // ARIA (RFC 5794)
    #[serde(rename = "ARIA-128-ECB")]
    #[strum(serialize = "ARIA-128-ECB")]
    Aria128Ecb,
    #[serde(rename = "ARIA-192-ECB")]
    #[strum(serialize = "ARIA-192-ECB")]
    Aria192Ecb,
    #[serde(rename = "ARIA-256-ECB")]
    #[strum(serialize = "ARIA-256-ECB")]
    Aria256Ecb,
    #[serde(rename = "ARIA-128-CBC")]
    #[strum(serialize = "ARIA-128-CBC")]
    Aria128Cbc,
    #[serde(rename = "ARIA-192-CBC")]
    #[strum(serialize = "ARIA-192-CBC")]
    Aria192Cbc,
    #[serde(rename = "ARIA-256-CBC")]
    #[strum(serialize = "ARIA-256-CBC")]
    Aria256Cbc,
    #[serde(rename = "ARIA-128-CTR")]
    #[strum(serialize = "ARIA-128-CTR")]
    Aria128Ctr,
    #[serde(rename = "ARIA-192-CTR")]
    #[strum(serialize = "ARIA-192-CTR")]
    Aria192Ctr,
    #[serde(rename = "ARIA-256-CTR")]
    #[strum(serialize = "ARIA-256-CTR")]
    Aria256Ctr,
    #[serde(rename = "ARIA-128-GCM")]
    #[strum(serialize = "ARIA-128-GCM")]
    Aria128Gcm,
    #[serde(rename = "ARIA-192-GCM")]
    #[strum(serialize = "ARIA-192-GCM")]
    Aria192Gcm,
    #[serde(rename = "ARIA-256-GCM")]
    #[strum(serialize = "ARIA-256-GCM")]
    Aria256Gcm,

    // Blowfish
    #[serde(rename = "BLOWF-128-ECB")]
    #[strum(serialize = "BLOWF-128-ECB")]
    Blowfish128Ecb,
    #[serde(rename = "BLOWF-128-CBC")]
    #[strum(serialize = "BLOWF-128-CBC")]
    Blowfish128Cbc,

    // Camellia (RFC 3713)
    #[serde(rename = "CAMELLIA-128-ECB")]
    #[strum(serialize = "CAMELLIA-128-ECB")]
    Camellia128Ecb,
    #[serde(rename = "CAMELLIA-192-ECB")]
    #[strum(serialize = "CAMELLIA-192-ECB")]
    Camellia192Ecb,
    #[serde(rename = "CAMELLIA-256-ECB")]
    #[strum(serialize = "CAMELLIA-256-ECB")]
    Camellia256Ecb,
    #[serde(rename = "CAMELLIA-128-CBC")]
    #[strum(serialize = "CAMELLIA-128-CBC")]
    Camellia128Cbc,
    #[serde(rename = "CAMELLIA-192-CBC")]
    #[strum(serialize = "CAMELLIA-192-CBC")]
    Camellia192Cbc,
    #[serde(rename = "CAMELLIA-256-CBC")]
    #[strum(serialize = "CAMELLIA-256-CBC")]
    Camellia256Cbc,
    #[serde(rename = "CAMELLIA-128-CTR")]
    #[strum(serialize = "CAMELLIA-128-CTR")]
    Camellia128Ctr,
    #[serde(rename = "CAMELLIA-192-CTR")]
    #[strum(serialize = "CAMELLIA-192-CTR")]
    Camellia192Ctr,
    #[serde(rename = "CAMELLIA-256-CTR")]
    #[strum(serialize = "CAMELLIA-256-CTR")]
    Camellia256Ctr,
    #[serde(rename = "CAMELLIA-128-GCM")]
    #[strum(serialize = "CAMELLIA-128-GCM")]
    Camellia128Gcm,
    #[serde(rename = "CAMELLIA-192-GCM")]
    #[strum(serialize = "CAMELLIA-192-GCM")]
    Camellia192Gcm,
    #[serde(rename = "CAMELLIA-256-GCM")]
    #[strum(serialize = "CAMELLIA-256-GCM")]
    Camellia256Gcm,

    // ChaCha, original 64-bit-nonce construction, by rounds and key size
    #[serde(rename = "CHACHA8-128")]
    #[strum(serialize = "CHACHA8-128")]
    ChaCha8Key128,
    #[serde(rename = "CHACHA8-256")]
    #[strum(serialize = "CHACHA8-256")]
    ChaCha8Key256,
    #[serde(rename = "CHACHA12-128")]
    #[strum(serialize = "CHACHA12-128")]
    ChaCha12Key128,
    #[serde(rename = "CHACHA12-256")]
    #[strum(serialize = "CHACHA12-256")]
    ChaCha12Key256,
    #[serde(rename = "CHACHA20-128")]
    #[strum(serialize = "CHACHA20-128")]
    ChaCha20Key128,
    #[serde(rename = "CHACHA20-256")]
    #[strum(serialize = "CHACHA20-256")]
    ChaCha20Key256,

    /// ChaCha20 as profiled by RFC 7539: 256-bit key, 96-bit nonce, 32-bit
    /// block counter.
    #[serde(rename = "CHACHA20-IETF")]
    #[strum(serialize = "CHACHA20-IETF")]
    ChaCha20Ietf,
    /// The RFC 7539 AEAD composition of ChaCha20 and Poly1305.
    #[serde(rename = "CHACHA20-POLY1305-AEAD")]
    #[strum(serialize = "CHACHA20-POLY1305-AEAD")]
    ChaCha20Poly1305,

    // DES and three-key triple DES
    #[serde(rename = "DES-ECB")]
    #[strum(serialize = "DES-ECB")]
    DesEcb,
    #[serde(rename = "DES-CBC")]
    #[strum(serialize = "DES-CBC")]
    DesCbc,
    #[serde(rename = "DES-EDE3")]
    #[strum(serialize = "DES-EDE3")]
    DesEde3Ecb,
    #[serde(rename = "DES-EDE3-CBC")]
    #[strum(serialize = "DES-EDE3-CBC")]
    DesEde3Cbc,

    // RC4
    #[serde(rename = "RC4-64")]
    #[strum(serialize = "RC4-64")]
    Rc4Key64,
    #[serde(rename = "RC4-128")]
    #[strum(serialize = "RC4-128")]
    Rc4Key128,

    // Salsa20
    #[serde(rename = "SALSA20-128")]
    #[strum(serialize = "SALSA20-128")]
    Salsa20Key128,
    #[serde(rename = "SALSA20-256")]
    #[strum(serialize = "SALSA20-256")]
    Salsa20Key256,

    // Twofish
    #[serde(rename = "TWOF-128-ECB")]
    #[strum(serialize = "TWOF-128-ECB")]
    Twofish128Ecb,
    #[serde(rename = "TWOF-192-ECB")]
    #[strum(serialize = "TWOF-192-ECB")]
    Twofish192Ecb,
    #[serde(rename = "TWOF-256-ECB")]
    #[strum(serialize = "TWOF-256-ECB")]
    Twofish256Ecb,
    #[serde(rename = "TWOF-128-CBC")]
    #[strum(serialize = "TWOF-128-CBC")]
    Twofish128Cbc,
    #[serde(rename = "TWOF-192-CBC")]
    #[strum(serialize = "TWOF-192-CBC")]
    Twofish192Cbc,
    #[serde(rename = "TWOF-256-CBC")]
    #[strum(serialize = "TWOF-256-CBC")]
    Twofish256Cbc,
    #[serde(rename = "TWOF-128-CTR")]
    #[strum(serialize = "TWOF-128-CTR")]
    Twofish128Ctr,
    #[serde(rename = "TWOF-192-CTR")]
    #[strum(serialize = "TWOF-192-CTR")]
    Twofish192Ctr,
    #[serde(rename = "TWOF-256-CTR")]
    #[strum(serialize = "TWOF-256-CTR")]
    Twofish256Ctr,
    #[serde(rename = "TWOF-128-GCM")]
    #[strum(serialize = "TWOF-128-GCM")]
    Twofish128Gcm,
    #[serde(rename = "TWOF-192-GCM")]
    #[strum(serialize = "TWOF-192-GCM")]
    Twofish192Gcm,
    #[serde(rename = "TWOF-256-GCM")]
    #[strum(serialize = "TWOF-256-GCM")]
    Twofish256Gcm,

    // XTEA
    #[serde(rename = "XTEA-128-ECB")]
    #[strum(serialize = "XTEA-128-ECB")]
    Xtea128Ecb,
    #[serde(rename = "XTEA-128-CBC")]
    #[strum(serialize = "XTEA-128-CBC")]
    Xtea128Cbc,
}

impl Algorithm {
    /// Canonical short name, e.g. `"AES-128-CBC"`.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Looks an algorithm up by its canonical short name. Exact,
    /// case-sensitive match.
    pub fn from_name(name: &str) -> Result<Self, InvalidAlgorithmError> {
        Self::iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| InvalidAlgorithmError(name.to_string()))
    }

    pub fn mode(&self) -> Mode {
        use Algorithm::*;
        match self {
            Aes128Ecb | Aes192Ecb | Aes256Ecb | Aria128Ecb | Aria192Ecb | Aria256Ecb
            | Blowfish128Ecb | Camellia128Ecb | Camellia192Ecb | Camellia256Ecb | DesEcb
            | DesEde3Ecb | Twofish128Ecb | Twofish192Ecb | Twofish256Ecb | Xtea128Ecb => Mode::Ecb,
            Aes128Cbc | Aes192Cbc | Aes256Cbc | Aria128Cbc | Aria192Cbc | Aria256Cbc
            | Blowfish128Cbc | Camellia128Cbc | Camellia192Cbc | Camellia256Cbc | DesCbc
            | DesEde3Cbc | Twofish128Cbc | Twofish192Cbc | Twofish256Cbc | Xtea128Cbc => Mode::Cbc,
            Aes128Ctr | Aes192Ctr | Aes256Ctr | Aria128Ctr | Aria192Ctr | Aria256Ctr
            | Camellia128Ctr | Camellia192Ctr | Camellia256Ctr | Twofish128Ctr | Twofish192Ctr
            | Twofish256Ctr => Mode::Ctr,
            Aes128Gcm | Aes192Gcm | Aes256Gcm | Aria128Gcm | Aria192Gcm | Aria256Gcm
            | Camellia128Gcm | Camellia192Gcm | Camellia256Gcm | Twofish128Gcm | Twofish192Gcm
            | Twofish256Gcm | ChaCha20Poly1305 => Mode::Aead,
            ChaCha8Key128 | ChaCha8Key256 | ChaCha12Key128 | ChaCha12Key256 | ChaCha20Key128
            | ChaCha20Key256 | ChaCha20Ietf | Rc4Key64 | Rc4Key128 | Salsa20Key128
            | Salsa20Key256 => Mode::Stream,
        }
    }

    /// Key length in bytes.
    pub fn key_len(&self) -> usize {
        use Algorithm::*;
        match self {
            DesEcb | DesCbc | Rc4Key64 => 8,
            Aes128Ecb | Aes128Cbc | Aes128Ctr | Aes128Gcm | Aria128Ecb | Aria128Cbc
            | Aria128Ctr | Aria128Gcm | Blowfish128Ecb | Blowfish128Cbc | Camellia128Ecb
            | Camellia128Cbc | Camellia128Ctr | Camellia128Gcm | Twofish128Ecb | Twofish128Cbc
            | Twofish128Ctr | Twofish128Gcm | Xtea128Ecb | Xtea128Cbc | Rc4Key128
            | Salsa20Key128 | ChaCha8Key128 | ChaCha12Key128 | ChaCha20Key128 => 16,
            Aes192Ecb | Aes192Cbc | Aes192Ctr | Aes192Gcm | Aria192Ecb | Aria192Cbc
            | Aria192Ctr | Aria192Gcm | Camellia192Ecb | Camellia192Cbc | Camellia192Ctr
            | Camellia192Gcm | Twofish192Ecb | Twofish192Cbc | Twofish192Ctr | Twofish192Gcm
            | DesEde3Ecb | DesEde3Cbc => 24,
            Aes256Ecb | Aes256Cbc | Aes256Ctr | Aes256Gcm | Aria256Ecb | Aria256Cbc
            | Aria256Ctr | Aria256Gcm | Camellia256Ecb | Camellia256Cbc | Camellia256Ctr
            | Camellia256Gcm | Twofish256Ecb | Twofish256Cbc | Twofish256Ctr | Twofish256Gcm
            | Salsa20Key256 | ChaCha8Key256 | ChaCha12Key256 | ChaCha20Key256 | ChaCha20Ietf
            | ChaCha20Poly1305 => 32,
        }
    }

    /// Nominal key strength in bits: 56 for DES and 168 for DES-EDE3 (parity
    /// bits do not count), otherwise `key_len() * 8`.
    pub fn key_bits(&self) -> u32 {
        match self {
            Self::DesEcb | Self::DesCbc => 56,
            Self::DesEde3Ecb | Self::DesEde3Cbc => 168,
            _ => self.key_len() as u32 * 8,
        }
    }

    /// The externally observable block size: the primitive's block size for
    /// ECB/CBC algorithms, 0 for CTR, AEAD and stream algorithms. A zero
    /// means "no block boundary is visible through the API", not that no
    /// block cipher is involved.
    pub fn block_size(&self) -> usize {
        use Algorithm::*;
        match self.mode() {
            Mode::Ecb | Mode::Cbc => match self {
                Blowfish128Ecb | Blowfish128Cbc | DesEcb | DesCbc | DesEde3Ecb | DesEde3Cbc
                | Xtea128Ecb | Xtea128Cbc => 8,
                _ => 16,
            },
            _ => 0,
        }
    }

    /// The IV/nonce length the caller supplies: 0 for ECB and RC4, the block
    /// size for CBC, 12 for CTR and GCM, 8 for the original ChaCha/Salsa20
    /// constructions, 12 for ChaCha20-IETF and ChaCha20-Poly1305.
    pub fn iv_size(&self) -> usize {
        use Algorithm::*;
        match self {
            ChaCha8Key128 | ChaCha8Key256 | ChaCha12Key128 | ChaCha12Key256 | ChaCha20Key128
            | ChaCha20Key256 | Salsa20Key128 | Salsa20Key256 => 8,
            ChaCha20Ietf | ChaCha20Poly1305 => 12,
            Rc4Key64 | Rc4Key128 => 0,
            _ => match self.mode() {
                Mode::Ecb => 0,
                Mode::Cbc => self.block_size(),
                Mode::Ctr | Mode::Aead => 12,
                Mode::Stream => 0,
            },
        }
    }

    /// Default authentication tag size: 16 for the AEAD algorithms, 0
    /// otherwise. GCM tags may be shortened down to 4 bytes via
    /// [`Cipher::set_tag_size`](crate::Cipher::set_tag_size).
    pub fn tag_size(&self) -> usize {
        if self.mode() == Mode::Aead {
            16
        } else {
            0
        }
    }

    /// True when the algorithm consumes data as a keystream (CTR, AEAD and
    /// stream modes).
    pub fn is_stream(&self) -> bool {
        self.mode().is_stream()
    }

    /// A freshly generated random key of the right length.
    pub fn generate_key(&self) -> Vec<u8> {
        let mut key = vec![0u8; self.key_len()];
        crate::rand::fill(&mut key);
        key
    }

    /// A freshly generated random IV/nonce of the right length. Empty for
    /// algorithms that take none.
    pub fn generate_iv(&self) -> Vec<u8> {
        let mut iv = vec![0u8; self.iv_size()];
        crate::rand::fill(&mut iv);
        iv
    }
}

impl FromStr for Algorithm {
    type Err = InvalidAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
