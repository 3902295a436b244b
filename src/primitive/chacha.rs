use zeroize::{Zeroize, ZeroizeOnDrop};

// state initialization constants: le-32bit words of b"expand 32-byte k"
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];
// le-32bit words of b"expand 16-byte k"
const TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

pub(crate) const BLOCK_LEN: usize = 64;

macro_rules! quarter_round {
    ($a:ident, $b:ident, $c:ident, $d:ident) => {
        $a = $a.wrapping_add($b);
        $d = ($d ^ $a).rotate_left(16);
        $c = $c.wrapping_add($d);
        $b = ($b ^ $c).rotate_left(12);
        $a = $a.wrapping_add($b);
        $d = ($d ^ $a).rotate_left(8);
        $c = $c.wrapping_add($d);
        $b = ($b ^ $c).rotate_left(7);
    };
}

/// ChaCha keystream generator covering both the original construction
/// (8/12/20 rounds, 128- or 256-bit key, 64-bit nonce, 64-bit counter) and
/// the RFC 7539 one (20 rounds, 256-bit key, 96-bit nonce, 32-bit counter).
///
/// State layout, as 32-bit little-endian words:
///
/// ```plaintext
/// C1 C2 C3 C4
/// K1 K2 K3 K4
/// K5 K6 K7 K8   (128-bit keys repeat K1..K4)
/// B1 B2 N1 N2   original: 64-bit counter, 64-bit nonce
/// B1 N1 N2 N3   IETF: 32-bit counter, 96-bit nonce
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct ChaCha {
    state: [u32; 16],
    rounds: u32,
    ietf: bool,
}

impl ChaCha {
    /// Original construction. `key` is 16 or 32 bytes, `iv` 8 bytes (zeros
    /// when absent), counter starts at 0.
    pub(crate) fn new(key: &[u8], rounds: u32, iv: Option<&[u8]>) -> Self {
        debug_assert!(key.len() == 16 || key.len() == 32);
        debug_assert!(matches!(rounds, 8 | 12 | 20));
        let mut state = [0u32; 16];
        let constants = if key.len() == 32 { &SIGMA } else { &TAU };
        state[..4].copy_from_slice(constants);
        load_words(&mut state[4..8], &key[..16]);
        let tail = if key.len() == 32 { &key[16..] } else { &key[..16] };
        load_words(&mut state[8..12], tail);
        let mut chacha = Self {
            state,
            rounds,
            ietf: false,
        };
        if let Some(iv) = iv {
            chacha.reseed(iv);
        }
        chacha
    }

    /// RFC 7539 construction. `key` is 32 bytes, `iv` 12 bytes (zeros when
    /// absent).
    pub(crate) fn new_ietf(key: &[u8], iv: Option<&[u8]>, counter: u32) -> Self {
        debug_assert_eq!(key.len(), 32);
        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&SIGMA);
        load_words(&mut state[4..12], key);
        state[12] = counter;
        let mut chacha = Self {
            state,
            rounds: 20,
            ietf: true,
        };
        if let Some(iv) = iv {
            chacha.reseed_ietf(iv, counter);
        }
        chacha
    }

    /// Rewinds the keystream to the start of a fresh 8-byte nonce.
    pub(crate) fn reseed(&mut self, iv: &[u8]) {
        debug_assert!(!self.ietf);
        self.state[12] = 0;
        self.state[13] = 0;
        load_words(&mut self.state[14..16], iv);
    }

    /// Repositions the keystream at `counter` under a fresh 12-byte nonce.
    pub(crate) fn reseed_ietf(&mut self, iv: &[u8], counter: u32) {
        debug_assert!(self.ietf);
        self.state[12] = counter;
        load_words(&mut self.state[13..16], iv);
    }

    fn next_block(&mut self, out: &mut [u8; BLOCK_LEN]) {
        let [mut x0, mut x1, mut x2, mut x3, mut x4, mut x5, mut x6, mut x7, mut x8, mut x9, mut x10, mut x11, mut x12, mut x13, mut x14, mut x15] =
            self.state;

        for _ in 0..self.rounds / 2 {
            quarter_round!(x0, x4, x8, x12);
            quarter_round!(x1, x5, x9, x13);
            quarter_round!(x2, x6, x10, x14);
            quarter_round!(x3, x7, x11, x15);

            quarter_round!(x0, x5, x10, x15);
            quarter_round!(x1, x6, x11, x12);
            quarter_round!(x2, x7, x8, x13);
            quarter_round!(x3, x4, x9, x14);
        }

        let words = [
            x0, x1, x2, x3, x4, x5, x6, x7, x8, x9, x10, x11, x12, x13, x14, x15,
        ];
        for (i, word) in words.iter().enumerate() {
            let sum = word.wrapping_add(self.state[i]);
            out[i * 4..i * 4 + 4].copy_from_slice(&sum.to_le_bytes());
        }

        self.state[12] = self.state[12].wrapping_add(1);
        if !self.ietf && self.state[12] == 0 {
            self.state[13] = self.state[13].wrapping_add(1);
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

#[cfg(test)]
mod tests {
    use super::*;

    // ECRYPT estreambench vectors: all-zero 128-bit key, zero nonce
    fn keystream(rounds: u32, len: usize) -> alloc::vec::Vec<u8> {
        let mut chacha = ChaCha::new(&[0u8; 16], rounds, None);
        let mut data = alloc::vec![0u8; len];
        chacha.process_mut(&mut data);
        data
    }

    #[test]
    fn chacha8_zero_key() {
        let stream = keystream(8, 128);
        assert_eq!(
            stream[..64].to_vec(),
            hex::decode(
                "e28a5fa4a67f8c5defed3e6fb7303486aa8427d31419a729572d777953491120\
                 b64ab8e72b8deb85cd6aea7cb6089a101824beeb08814a428aab1fa2c816081b"
            )
            .unwrap()
        );
        assert_eq!(
            stream[64..].to_vec(),
            hex::decode(
                "8a26af448a1ba906368fd8c83831c18cec8ced811a028e675b8d2be8fce08116\
                 5ceae9f1d1b7a975497749480569ceb83de6a0a587d4984f19925f5d338e430d"
            )
            .unwrap()
        );
    }

    #[test]
    fn chacha12_zero_key() {
        let stream = keystream(12, 64);
        assert_eq!(
            stream,
            hex::decode(
                "e1047ba9476bf8ff312c01b4345a7d8ca5792b0ad467313f1dc412b5fdce3241\
                 0dea8b68bd774c36a920f092a04d3f95274fbeff97bc8491fcef37f85970b450"
            )
            .unwrap()
        );
    }

    #[test]
    fn chacha20_zero_key() {
        let stream = keystream(20, 64);
        assert_eq!(
            stream,
            hex::decode(
                "89670952608364fd00b2f90936f031c8e756e15dba04b8493d00429259b20f46\
                 cc04f111246b6c2ce066be3bfb32d9aa0fddfbc12123d4b9e44f34dca05a103f"
            )
            .unwrap()
        );
    }

    #[test]
    fn ietf_rfc7539_block() {
        // RFC 7539 section 2.3.2
        let key: alloc::vec::Vec<u8> = (0u8..32).collect();
        let nonce = hex::decode("000000090000004a00000000").unwrap();
        let mut chacha = ChaCha::new_ietf(&key, Some(&nonce), 1);
        let mut block = [0u8; 64];
        chacha.process_mut(&mut block);
        assert_eq!(
            block.to_vec(),
            hex::decode(
                "10f1e7e4d13b5915500fdd1fa32071c4c7d1f4c733c068030422aa9ac3d46c4e\
                 d2826446079faa0914c2d705d98b02a2b5129cd1de164eb9cbd083e8a2503c4e"
            )
            .unwrap()
        );
    }

    #[test]
    fn counter_spans_blocks() {
        // one 96-byte call equals a 64-byte call followed by a 32-byte call
        let key = [7u8; 32];
        let iv = [9u8; 8];
        let mut one = ChaCha::new(&key, 20, Some(&iv));
        let mut whole = [0u8; 96];
        one.process_mut(&mut whole);

        let mut two = ChaCha::new(&key, 20, Some(&iv));
        let mut parts = [0u8; 96];
        let (head, tail) = parts.split_at_mut(64);
        two.process_mut(head);
        two.process_mut(tail);
        assert_eq!(whole, parts);
    }

    #[test]
    fn reseed_rewinds() {
        let key = [3u8; 16];
        let iv = [1u8; 8];
        let mut chacha = ChaCha::new(&key, 8, Some(&iv));
        let mut first = [0u8; 32];
        chacha.process_mut(&mut first);
        let mut again = [0u8; 32];
        chacha.reseed(&iv);
        chacha.process_mut(&mut again);
        assert_eq!(first, again);
    }
}
