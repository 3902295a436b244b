use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Mode of operation a context runs in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, Display, EnumIter,
)]
pub enum Mode {
    /// Electronic Code Book
    #[serde(rename = "ECB")]
    #[strum(serialize = "ECB")]
    Ecb,
    /// Cipher Block Chaining
    #[serde(rename = "CBC")]
    #[strum(serialize = "CBC")]
    Cbc,
    /// Counter
    #[serde(rename = "CTR")]
    #[strum(serialize = "CTR")]
    Ctr,
    /// Authenticated Encryption with Associated Data
    #[serde(rename = "AEAD")]
    #[strum(serialize = "AEAD")]
    Aead,
    /// Plain keystream
    #[serde(rename = "STREAM")]
    #[strum(serialize = "STREAM")]
    Stream,
}

impl Mode {
    /// True for the modes that process data as a keystream rather than in
    /// fixed blocks: CTR, AEAD and plain stream.
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Ctr | Self::Aead | Self::Stream)
    }

    /// True for the block modes that accept a padding scheme.
    pub fn takes_padding(&self) -> bool {
        matches!(self, Self::Ecb | Self::Cbc)
    }
}
