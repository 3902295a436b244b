use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Padding scheme for the ECB and CBC modes.
///
/// All three schemes fill the trailing block with `n` bytes, `1 <= n <= B`,
/// where `B` is the block size; an input that is already a multiple of `B`
/// gains a whole extra block. They differ in what the `n` bytes look like:
///
/// * `Size` — every pad byte is `n` (the PKCS#7 / RFC 2898 / RFC 4346
///   technique).
/// * `Zeros` — the first pad byte is `n`, the remaining `n - 1` are `0x00`.
/// * `Ones` — the first pad byte is `n`, the remaining `n - 1` are `0xFF`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    Display,
    EnumIter,
)]
pub enum Padding {
    #[default]
    #[serde(rename = "NONE")]
    #[strum(serialize = "NONE")]
    None,
    #[serde(rename = "SIZE")]
    #[strum(serialize = "SIZE")]
    Size,
    #[serde(rename = "ZEROS")]
    #[strum(serialize = "ZEROS")]
    Zeros,
    #[serde(rename = "ONES")]
    #[strum(serialize = "ONES")]
    Ones,
}

impl Padding {
    /// Fills `block[rem..]` with the pad bytes of this scheme. `block` is the
    /// trailing block and `rem` the number of payload bytes it already holds.
    pub(crate) fn fill(&self, block: &mut [u8], rem: usize) {
        let pad = (block.len() - rem) as u8;
        match self {
            Self::Size => {
                for byte in &mut block[rem..] {
                    *byte = pad;
                }
            }
            Self::Zeros | Self::Ones => {
                let filler = if *self == Self::Zeros { 0x00 } else { 0xff };
                block[rem] = pad;
                for byte in &mut block[rem + 1..] {
                    *byte = filler;
                }
            }
            Self::None => {}
        }
    }

    /// Verifies the pad in a decrypted trailing block and returns how many
    /// bytes to strip, or `None` if the block does not verify.
    pub(crate) fn strip(&self, block: &[u8]) -> Option<usize> {
        match self {
            Self::Size => {
                let pad = block[block.len() - 1] as usize;
                if pad == 0 || pad > block.len() {
                    return None;
                }
                if block[block.len() - pad..].iter().any(|&b| b as usize != pad) {
                    return None;
                }
                Some(pad)
            }
            Self::Zeros | Self::Ones => {
                let filler = if *self == Self::Zeros { 0x00 } else { 0xff };
                let run = block.iter().rev().take_while(|&&b| b == filler).count();
                if run >= block.len() {
                    return None;
                }
                let pad = run + 1;
                if block[block.len() - pad] as usize != pad {
                    return None;
                }
                Some(pad)
            }
            Self::None => Some(0),
        }
    }
}
