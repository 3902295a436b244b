use zeroize::{Zeroize, ZeroizeOnDrop};

// le-32bit words of b"expand 32-byte k" / b"expand 16-byte k"; Salsa20
// scatters them across the state corners
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];
const TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

pub(crate) const BLOCK_LEN: usize = 64;
const ROUNDS: u32 = 20;

macro_rules! quarter_round {
    ($a:ident, $b:ident, $c:ident, $d:ident) => {
        $b ^= $a.wrapping_add($d).rotate_left(7);
        $c ^= $b.wrapping_add($a).rotate_left(9);
        $d ^= $c.wrapping_add($b).rotate_left(13);
        $a ^= $d.wrapping_add($c).rotate_left(18);
    };
}

/// Salsa20 keystream generator with a 128- or 256-bit key, 64-bit nonce and
/// 64-bit block counter.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Salsa20 {
    state: [u32; 16],
}

impl Salsa20 {
    /// `key` is 16 or 32 bytes, `iv` 8 bytes (zeros when absent), counter
    /// starts at 0.
    pub(crate) fn new(key: &[u8], iv: Option<&[u8]>) -> Self {
        debug_assert!(key.len() == 16 || key.len() == 32);
        let mut state = [0u32; 16];
        let constants = if key.len() == 32 { &SIGMA } else { &TAU };
        state[0] = constants[0];
        load_words(&mut state[1..5], &key[..16]);
        state[5] = constants[1];
        state[10] = constants[2];
        let tail = if key.len() == 32 { &key[16..] } else { &key[..16] };
        load_words(&mut state[11..15], tail);
        state[15] = constants[3];
        let mut salsa = Self { state };
        if let Some(iv) = iv {
            salsa.reseed(iv);
        }
        salsa
    }

    /// Rewinds the keystream to the start of a fresh 8-byte nonce.
    pub(crate) fn reseed(&mut self, iv: &[u8]) {
        load_words(&mut self.state[6..8], iv);
        self.state[8] = 0;
        self.state[9] = 0;
    }

    fn next_block(&mut self, out: &mut [u8; BLOCK_LEN]) {
        let [mut x0, mut x1, mut x2, mut x3, mut x4, mut x5, mut x6, mut x7, mut x8, mut x9, mut x10, mut x11, mut x12, mut x13, mut x14, mut x15] =
            self.state;

        for _ in 0..ROUNDS / 2 {
            quarter_round!(x0, x4, x8, x12);
            quarter_round!(x5, x9, x13, x1);
            quarter_round!(x10, x14, x2, x6);
            quarter_round!(x15, x3, x7, x11);

            quarter_round!(x0, x1, x2, x3);
            quarter_round!(x5, x6, x7, x4);
            quarter_round!(x10, x11, x8, x9);
            quarter_round!(x15, x12, x13, x14);
        }

        let words = [
            x0, x1, x2, x3, x4, x5, x6, x7, x8, x9, x10, x11, x12, x13, x14, x15,
        ];
        for (i, word) in words.iter().enumerate() {
            let sum = word.wrapping_add(self.state[i]);
            out[i * 4..i * 4 + 4].copy_from_slice(&sum.to_le_bytes());
        }

        self.state[8] = self.state[8].wrapping_add(1);
        if self.state[8] == 0 {
            self.state[9] = self.state[9].wrapping_add(1);
        }
    }

    /// XORs the keystream into `data`, advancing the block counter.
    pub(crate) fn process_mut(&mut self, data: &mut [u8]) {
        let mut block = [0u8; BLOCK_LEN];
        for chunk in data.chunks_mut(BLOCK_LEN) {
            self.next_block(&mut block);
            for (byte, key) in chunk.iter_mut().zip(block.iter()) {
                *byte ^= *key;
            }
        }
    }
}

fn load_words(words: &mut [u32], bytes: &[u8]) {
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes(chunk.try_into().unwrap());
    }
}
