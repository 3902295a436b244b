use rand_core::{CryptoRng, OsRng, RngCore};

pub(crate) fn fill(dst: &mut [u8]) {
    Random.fill_bytes(dst)
}

/// A random number generator backed by the operating system's entropy
/// source via [rand_core's `OsRng`](https://docs.rs/rand_core/0.6/rand_core/struct.OsRng.html).
pub struct Random;

impl CryptoRng for Random {}

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        OsRng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        OsRng.try_fill_bytes(dest)
    }
}
