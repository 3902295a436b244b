use alloc::{
    fmt::{self, Display},
    string::String,
};

use crate::{Algorithm, Mode};

#[cfg(not(feature = "std"))]
pub trait Error: core::fmt::Debug + core::fmt::Display {}

#[cfg(feature = "std")]
pub use std::error::Error;

/// Returned by [`Algorithm::from_name`](crate::Algorithm::from_name) when no
/// catalog entry matches the given name. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAlgorithmError(pub String);

impl Error for InvalidAlgorithmError {}

impl Display for InvalidAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cifra: unknown algorithm \"{}\"", self.0)
    }
}

/// The supplied key does not have the exact length the algorithm requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengthError {
    pub algorithm: Algorithm,
    pub expected: usize,
    pub got: usize,
}

impl Error for KeyLengthError {}

impl Display for KeyLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cifra: {} takes a {}-byte key, got {} bytes",
            self.algorithm.name(),
            self.expected,
            self.got
        )
    }
}

/// The supplied IV or nonce does not have the length the algorithm and mode
/// require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IvLengthError {
    pub expected: usize,
    pub got: usize,
}

impl Error for IvLengthError {}

impl Display for IvLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cifra: expected a {}-byte IV, got {} bytes",
            self.expected, self.got
        )
    }
}

/// Context construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    KeyLength(KeyLengthError),
    IvLength(IvLengthError),
}

impl Error for InitError {}

impl Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyLength(e) => Display::fmt(e, f),
            Self::IvLength(e) => Display::fmt(e, f),
        }
    }
}

impl From<KeyLengthError> for InitError {
    fn from(e: KeyLengthError) -> Self {
        Self::KeyLength(e)
    }
}

impl From<IvLengthError> for InitError {
    fn from(e: IvLengthError) -> Self {
        Self::IvLength(e)
    }
}

/// The requested authentication tag size is not valid for the algorithm:
/// GCM accepts 4..=16 bytes, ChaCha20-Poly1305 exactly 16, and non-AEAD
/// modes have no tag at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTagSizeError {
    pub algorithm: Algorithm,
    pub size: usize,
}

impl Error for InvalidTagSizeError {}

impl Display for InvalidTagSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cifra: invalid tag size {} for {}",
            self.size,
            self.algorithm.name()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptError {
    /// The operation does not apply to the context's mode, e.g. a plain
    /// `encrypt` on an AEAD context or `encrypt_aead` on a block context.
    WrongMode(Mode),
    /// The AEAD nonce has the wrong length.
    NonceLength(IvLengthError),
    /// The output buffer cannot hold the (possibly padded) ciphertext.
    BufferTooSmall { needed: usize, got: usize },
}

impl Error for EncryptError {}

impl Display for EncryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongMode(mode) => {
                write!(f, "cifra: operation not available in {mode} mode")
            }
            Self::NonceLength(e) => Display::fmt(e, f),
            Self::BufferTooSmall { needed, got } => {
                write!(f, "cifra: output buffer too small: need {needed}, got {got}")
            }
        }
    }
}

impl From<IvLengthError> for EncryptError {
    fn from(e: IvLengthError) -> Self {
        Self::NonceLength(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptError {
    /// The operation does not apply to the context's mode.
    WrongMode(Mode),
    /// The AEAD nonce has the wrong length.
    NonceLength(IvLengthError),
    /// The output buffer cannot hold the decrypted data.
    BufferTooSmall { needed: usize, got: usize },
    /// The trailing block does not verify under the selected padding scheme.
    /// Usually means a wrong key, a wrong IV or corrupted ciphertext.
    Padding,
}

impl Error for DecryptError {}

impl Display for DecryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongMode(mode) => {
                write!(f, "cifra: operation not available in {mode} mode")
            }
            Self::NonceLength(e) => Display::fmt(e, f),
            Self::BufferTooSmall { needed, got } => {
                write!(f, "cifra: output buffer too small: need {needed}, got {got}")
            }
            Self::Padding => write!(f, "cifra: padding verification failed"),
        }
    }
}

impl From<IvLengthError> for DecryptError {
    fn from(e: IvLengthError) -> Self {
        Self::NonceLength(e)
    }
}

/// Returned by [`Cipher::reseed`](crate::Cipher::reseed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReseedError {
    /// Reseeding only applies to stream-mode contexts with an IV channel.
    NotStream,
    IvLength(IvLengthError),
}

impl Error for ReseedError {}

impl Display for ReseedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStream => write!(f, "cifra: context cannot be reseeded"),
            Self::IvLength(e) => Display::fmt(e, f),
        }
    }
}

impl From<IvLengthError> for ReseedError {
    fn from(e: IvLengthError) -> Self {
        Self::IvLength(e)
    }
}
