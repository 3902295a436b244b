use zeroize::Zeroize;

use crate::{
    constant_time,
    error::{
        DecryptError, EncryptError, InitError, InvalidTagSizeError, IvLengthError, KeyLengthError,
        ReseedError,
    },
    primitive::Primitive,
    Algorithm, Mode, Padding,
};

mod block;
mod chacha20poly1305;
mod ctr;
mod gcm;

/// Largest block any supported block primitive has.
pub(crate) const BLOCK_MAX: usize = 16;
/// Largest authentication tag.
const TAG_MAX: usize = 16;
/// CTR mode nonce length; the remaining 4 bytes of the block hold the
/// big-endian counter.
const CTR_IV_LEN: usize = 12;
/// AEAD nonce length of the GCM short-nonce fast path and of
/// ChaCha20-Poly1305.
const AEAD_IV_LEN: usize = 12;

/// A one-shot symmetric cipher context.
///
/// A context is created for one algorithm with [`Cipher::new`] (or
/// [`Cipher::with_counter`] for the counter-based modes) and then drives
/// whole messages through [`encrypt`](Self::encrypt) /
/// [`decrypt`](Self::decrypt) or, for the AEAD algorithms,
/// [`encrypt_aead`](Self::encrypt_aead) /
/// [`decrypt_aead`](Self::decrypt_aead).
///
/// CBC, CTR and the stream modes carry their chaining state across calls:
/// two consecutive `encrypt` calls are equivalent to one call over the
/// concatenated input. Callers who need independent messages create a fresh
/// context (or [`reseed`](Self::reseed) a stream context).
///
/// The `_in_place` variants transform a single buffer and are the supported
/// way to encrypt with the output overlapping the input.
///
/// Dropping the context zeroes its key-bearing state.
pub struct Cipher {
    algorithm: Algorithm,
    mode: Mode,
    padding: Padding,
    /// Block length the engines work in: the primitive's native block size
    /// for the block and counter modes, 0 for pure keystream primitives.
    block_len: usize,
    /// CBC chain register or CTR nonce prefix.
    chain: [u8; BLOCK_MAX],
    /// CTR block counter, big-endian on the wire.
    counter: u32,
    /// GCM hash subkey `H = E_K(0^16)`.
    hash_key: [u8; BLOCK_MAX],
    tag: [u8; TAG_MAX],
    tag_len: usize,
    primitive: Primitive,
}

impl Cipher {
    /// Creates a context with the counter (where one applies) starting at 0.
    ///
    /// `iv` is the init-time IV: the CBC chain seed, the CTR/stream nonce.
    /// `None` stands for all zeros. ECB and RC4 take no IV, and the AEAD
    /// algorithms receive their nonce per call instead.
    pub fn new(algorithm: Algorithm, key: &[u8], iv: Option<&[u8]>) -> Result<Self, InitError> {
        Self::with_counter(algorithm, key, iv, 0)
    }

    /// Creates a context whose block counter starts at `counter`. Only CTR
    /// mode and CHACHA20-IETF consume the counter; everything else ignores
    /// it.
    pub fn with_counter(
        algorithm: Algorithm,
        key: &[u8],
        iv: Option<&[u8]>,
        counter: u32,
    ) -> Result<Self, InitError> {
        if key.len() != algorithm.key_len() {
            return Err(KeyLengthError {
                algorithm,
                expected: algorithm.key_len(),
                got: key.len(),
            }
            .into());
        }
        let mode = algorithm.mode();
        let init_iv_len = match mode {
            Mode::Cbc => algorithm.block_size(),
            Mode::Ctr => CTR_IV_LEN,
            Mode::Stream => algorithm.iv_size(),
            // ECB has no IV; AEAD nonces arrive with each message
            Mode::Ecb | Mode::Aead => 0,
        };
        if let Some(iv) = iv {
            if init_iv_len > 0 && iv.len() != init_iv_len {
                return Err(IvLengthError {
                    expected: init_iv_len,
                    got: iv.len(),
                }
                .into());
            }
        }

        let block_len = match mode {
            Mode::Ecb | Mode::Cbc => algorithm.block_size(),
            Mode::Ctr => BLOCK_MAX,
            Mode::Aead if algorithm != Algorithm::ChaCha20Poly1305 => BLOCK_MAX,
            _ => 0,
        };

        let mut chain = [0u8; BLOCK_MAX];
        if matches!(mode, Mode::Cbc | Mode::Ctr) {
            if let Some(iv) = iv {
                chain[..init_iv_len].copy_from_slice(iv);
            }
        }

        let mut cipher = Self {
            algorithm,
            mode,
            padding: Padding::None,
            block_len,
            chain,
            counter: if mode == Mode::Ctr { counter } else { 0 },
            hash_key: [0u8; BLOCK_MAX],
            tag: [0u8; TAG_MAX],
            tag_len: algorithm.tag_size(),
            primitive: Primitive::for_algorithm(algorithm, key, iv, counter),
        };

        if cipher.is_gcm() {
            let mut subkey = [0u8; BLOCK_MAX];
            cipher.primitive.encrypt_block(&mut subkey);
            cipher.hash_key = subkey;
        }

        Ok(cipher)
    }

    fn is_gcm(&self) -> bool {
        self.mode == Mode::Aead && self.algorithm != Algorithm::ChaCha20Poly1305
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Canonical algorithm name, e.g. `"AES-128-CBC"`.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// See [`Algorithm::block_size`]: 0 for every mode without an externally
    /// observable block boundary.
    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn iv_size(&self) -> usize {
        self.algorithm.iv_size()
    }

    pub fn key_bits(&self) -> u32 {
        self.algorithm.key_bits()
    }

    pub fn is_stream(&self) -> bool {
        self.mode.is_stream()
    }

    /// Selects the padding scheme for the ECB and CBC modes and returns the
    /// previous one. Silently ignored in every other mode.
    pub fn set_padding(&mut self, padding: Padding) -> Padding {
        let old = self.padding;
        if self.mode.takes_padding() {
            self.padding = padding;
        }
        old
    }

    /// How many bytes [`encrypt`](Self::encrypt) will append to a `len`-byte
    /// input under the active padding scheme: `B - (len % B)`, always in
    /// `1..=B` once a scheme is set, 0 otherwise.
    pub fn pad_needed(&self, len: usize) -> usize {
        if self.padding == Padding::None || !self.mode.takes_padding() {
            return 0;
        }
        self.block_len - (len % self.block_len)
    }

    /// The number of ciphertext bytes [`encrypt`](Self::encrypt) produces
    /// for `len` input bytes. Size `dest` with this.
    pub fn encrypted_len(&self, len: usize) -> usize {
        match self.mode {
            Mode::Ecb | Mode::Cbc => {
                let full = len - len % self.block_len;
                if self.padding == Padding::None {
                    full
                } else {
                    full + self.block_len
                }
            }
            _ => len,
        }
    }

    /// Encrypts `orig` into `dest` and returns the number of bytes written.
    ///
    /// In ECB/CBC with [`Padding::None`], trailing bytes beyond the last
    /// whole block are silently discarded: the return value is the number of
    /// bytes actually processed, which is then smaller than `orig.len()`.
    /// With a padding scheme set, `dest` must hold
    /// [`encrypted_len`](Self::encrypted_len) bytes.
    ///
    /// Not available for the AEAD algorithms; use
    /// [`encrypt_aead`](Self::encrypt_aead).
    pub fn encrypt(&mut self, dest: &mut [u8], orig: &[u8]) -> Result<usize, EncryptError> {
        if self.mode == Mode::Aead {
            return Err(EncryptError::WrongMode(self.mode));
        }
        let needed = self.encrypted_len(orig.len());
        if dest.len() < needed {
            return Err(EncryptError::BufferTooSmall {
                needed,
                got: dest.len(),
            });
        }
        let copy = orig.len().min(needed);
        dest[..copy].copy_from_slice(&orig[..copy]);
        self.encrypt_in_place(dest, copy)
    }

    /// In-place form of [`encrypt`](Self::encrypt): the payload is
    /// `data[..len]` and the (possibly padded) ciphertext replaces it.
    /// `data` must have room for [`encrypted_len`](Self::encrypted_len)
    /// bytes when a padding scheme is active.
    pub fn encrypt_in_place(&mut self, data: &mut [u8], len: usize) -> Result<usize, EncryptError> {
        if len > data.len() {
            return Err(EncryptError::BufferTooSmall {
                needed: len,
                got: data.len(),
            });
        }
        match self.mode {
            Mode::Aead => Err(EncryptError::WrongMode(self.mode)),
            Mode::Ecb | Mode::Cbc => self.block_encrypt_in_place(data, len),
            Mode::Ctr => {
                self.ctr_transform(&mut data[..len]);
                Ok(len)
            }
            Mode::Stream => {
                self.primitive.apply_keystream(&mut data[..len]);
                Ok(len)
            }
        }
    }

    /// Decrypts `orig` into `dest` and returns the number of plaintext
    /// bytes produced (after padding removal, where a scheme is set).
    ///
    /// In ECB/CBC, `orig.len()` is expected to be a multiple of the block
    /// size; a trailing partial block is ignored. A padding scheme that does
    /// not verify yields [`DecryptError::Padding`].
    ///
    /// Not available for the AEAD algorithms; use
    /// [`decrypt_aead`](Self::decrypt_aead).
    pub fn decrypt(&mut self, dest: &mut [u8], orig: &[u8]) -> Result<usize, DecryptError> {
        if self.mode == Mode::Aead {
            return Err(DecryptError::WrongMode(self.mode));
        }
        if dest.len() < orig.len() {
            return Err(DecryptError::BufferTooSmall {
                needed: orig.len(),
                got: dest.len(),
            });
        }
        dest[..orig.len()].copy_from_slice(orig);
        let len = orig.len();
        self.decrypt_in_place(&mut dest[..len])
    }

    /// In-place form of [`decrypt`](Self::decrypt) over the whole of
    /// `data`.
    pub fn decrypt_in_place(&mut self, data: &mut [u8]) -> Result<usize, DecryptError> {
        match self.mode {
            Mode::Aead => Err(DecryptError::WrongMode(self.mode)),
            Mode::Ecb | Mode::Cbc => self.block_decrypt_in_place(data),
            Mode::Ctr => {
                self.ctr_transform(data);
                Ok(data.len())
            }
            Mode::Stream => {
                self.primitive.apply_keystream(data);
                Ok(data.len())
            }
        }
    }

    /// AEAD encryption of `orig` into `dest` under `nonce` with the
    /// associated data `aad`; the authentication tag is computed over both
    /// and left in [`tag`](Self::tag). Returns the ciphertext length (always
    /// `orig.len()`; the tag is not appended).
    ///
    /// GCM takes a nonce of any length — 12 bytes uses the
    /// `nonce ‖ 0x00000001` fast path, anything else derives the initial
    /// counter block through GHASH. ChaCha20-Poly1305 requires exactly 12
    /// bytes.
    pub fn encrypt_aead(
        &mut self,
        dest: &mut [u8],
        orig: &[u8],
        nonce: &[u8],
        aad: &[u8],
    ) -> Result<usize, EncryptError> {
        if dest.len() < orig.len() {
            return Err(EncryptError::BufferTooSmall {
                needed: orig.len(),
                got: dest.len(),
            });
        }
        dest[..orig.len()].copy_from_slice(orig);
        self.encrypt_aead_in_place(&mut dest[..orig.len()], nonce, aad)?;
        Ok(orig.len())
    }

    /// In-place form of [`encrypt_aead`](Self::encrypt_aead).
    pub fn encrypt_aead_in_place(
        &mut self,
        data: &mut [u8],
        nonce: &[u8],
        aad: &[u8],
    ) -> Result<(), EncryptError> {
        if self.mode != Mode::Aead {
            return Err(EncryptError::WrongMode(self.mode));
        }
        if self.algorithm == Algorithm::ChaCha20Poly1305 {
            if nonce.len() != AEAD_IV_LEN {
                return Err(IvLengthError {
                    expected: AEAD_IV_LEN,
                    got: nonce.len(),
                }
                .into());
            }
            self.chacha20poly1305_transform(data, nonce, aad, false);
        } else {
            self.gcm_transform(data, nonce, aad, false);
        }
        Ok(())
    }

    /// AEAD decryption of `orig` into `dest`. The tag is recomputed over
    /// `aad` and the ciphertext and left in [`tag`](Self::tag); a mismatch
    /// is **not** an error here — callers must check with
    /// [`verify_tag`](Self::verify_tag) and discard the plaintext when it
    /// fails.
    pub fn decrypt_aead(
        &mut self,
        dest: &mut [u8],
        orig: &[u8],
        nonce: &[u8],
        aad: &[u8],
    ) -> Result<usize, DecryptError> {
        if dest.len() < orig.len() {
            return Err(DecryptError::BufferTooSmall {
                needed: orig.len(),
                got: dest.len(),
            });
        }
        dest[..orig.len()].copy_from_slice(orig);
        self.decrypt_aead_in_place(&mut dest[..orig.len()], nonce, aad)?;
        Ok(orig.len())
    }

    /// In-place form of [`decrypt_aead`](Self::decrypt_aead).
    pub fn decrypt_aead_in_place(
        &mut self,
        data: &mut [u8],
        nonce: &[u8],
        aad: &[u8],
    ) -> Result<(), DecryptError> {
        if self.mode != Mode::Aead {
            return Err(DecryptError::WrongMode(self.mode));
        }
        if self.algorithm == Algorithm::ChaCha20Poly1305 {
            if nonce.len() != AEAD_IV_LEN {
                return Err(IvLengthError {
                    expected: AEAD_IV_LEN,
                    got: nonce.len(),
                }
                .into());
            }
            self.chacha20poly1305_transform(data, nonce, aad, true);
        } else {
            self.gcm_transform(data, nonce, aad, true);
        }
        Ok(())
    }

    /// Selects the authentication tag size for the following AEAD calls.
    /// GCM accepts 4..=16 bytes; ChaCha20-Poly1305 only 16.
    pub fn set_tag_size(&mut self, size: usize) -> Result<(), InvalidTagSizeError> {
        let valid = match self.mode {
            Mode::Aead if self.algorithm == Algorithm::ChaCha20Poly1305 => size == TAG_MAX,
            Mode::Aead => (4..=TAG_MAX).contains(&size),
            _ => false,
        };
        if !valid {
            return Err(InvalidTagSizeError {
                algorithm: self.algorithm,
                size,
            });
        }
        self.tag_len = size;
        Ok(())
    }

    /// The tag computed by the most recent AEAD call, truncated to the
    /// configured tag size. Empty for non-AEAD contexts.
    pub fn tag(&self) -> &[u8] {
        &self.tag[..self.tag_len]
    }

    /// Constant-time comparison of `tag` against [`tag`](Self::tag). False
    /// on any length mismatch and for non-AEAD contexts.
    pub fn verify_tag(&self, tag: &[u8]) -> bool {
        self.mode == Mode::Aead && constant_time::eq(self.tag(), tag)
    }

    /// Rewinds a stream-mode context onto a fresh IV. The original
    /// ChaCha/Salsa20 constructions reset their block counter to 0 and
    /// ignore `counter`; CHACHA20-IETF repositions at `counter`. RC4 has no
    /// IV channel and cannot be reseeded.
    pub fn reseed(&mut self, iv: &[u8], counter: u32) -> Result<(), ReseedError> {
        if self.mode != Mode::Stream {
            return Err(ReseedError::NotStream);
        }
        let expected = self.algorithm.iv_size();
        if expected == 0 {
            return Err(ReseedError::NotStream);
        }
        if iv.len() != expected {
            return Err(IvLengthError {
                expected,
                got: iv.len(),
            }
            .into());
        }
        match &mut self.primitive {
            Primitive::ChaCha(chacha) => {
                if self.algorithm == Algorithm::ChaCha20Ietf {
                    chacha.reseed_ietf(iv, counter);
                } else {
                    chacha.reseed(iv);
                }
            }
            Primitive::Salsa20(salsa) => salsa.reseed(iv),
            _ => return Err(ReseedError::NotStream),
        }
        Ok(())
    }
}

impl core::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cipher").field(&self.algorithm).finish()
    }
}

impl Drop for Cipher {
    fn drop(&mut self) {
        self.chain.zeroize();
        self.hash_key.zeroize();
        self.tag.zeroize();
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use quickcheck_macros::quickcheck;
    use strum::IntoEnumIterator;

    use crate::error::{DecryptError, EncryptError, ReseedError};
    use crate::{Algorithm, Cipher, Mode, Padding};

    const NONCE: [u8; 12] = [7u8; 12];
    const AAD: &[u8] = b"associated data";

    fn fixture(algorithm: Algorithm) -> Cipher {
        let key = vec![0x42u8; algorithm.key_len()];
        Cipher::with_counter(algorithm, &key, None, 1).unwrap()
    }

    #[quickcheck]
    fn whole_registry_round_trips(data: Vec<u8>) -> bool {
        for algorithm in Algorithm::iter() {
            let block = algorithm.block_size().max(1);
            let msg = &data[..data.len() - data.len() % block];

            let mut enc = fixture(algorithm);
            let mut dec = fixture(algorithm);
            let mut ct = vec![0u8; msg.len()];
            let mut pt = vec![0u8; msg.len()];
            if algorithm.mode() == Mode::Aead {
                enc.encrypt_aead(&mut ct, msg, &NONCE, AAD).unwrap();
                dec.decrypt_aead(&mut pt, &ct, &NONCE, AAD).unwrap();
                if !dec.verify_tag(enc.tag()) {
                    return false;
                }
            } else {
                enc.encrypt(&mut ct, msg).unwrap();
                dec.decrypt(&mut pt, &ct).unwrap();
            }
            if pt != msg {
                return false;
            }
        }
        true
    }

    #[quickcheck]
    fn every_padding_scheme_round_trips(data: Vec<u8>) -> bool {
        for algorithm in Algorithm::iter().filter(|a| a.mode().takes_padding()) {
            let block = algorithm.block_size();
            let msg = &data[..data.len().min(4 * block)];
            for padding in [Padding::Size, Padding::Zeros, Padding::Ones] {
                let mut enc = fixture(algorithm);
                enc.set_padding(padding);
                let mut dec = fixture(algorithm);
                dec.set_padding(padding);

                let mut ct = vec![0u8; enc.encrypted_len(msg.len())];
                let written = enc.encrypt(&mut ct, msg).unwrap();
                if written != (msg.len() / block + 1) * block {
                    return false;
                }
                let mut pt = vec![0u8; written];
                let produced = dec.decrypt(&mut pt, &ct).unwrap();
                if &pt[..produced] != msg {
                    return false;
                }
            }
        }
        true
    }

    #[quickcheck]
    fn in_place_matches_split_buffers(data: Vec<u8>) -> bool {
        for algorithm in Algorithm::iter() {
            let block = algorithm.block_size().max(1);
            let msg = &data[..data.len() - data.len() % block];

            let mut split = vec![0u8; msg.len()];
            let mut joined = msg.to_vec();
            let mut one = fixture(algorithm);
            let mut two = fixture(algorithm);
            if algorithm.mode() == Mode::Aead {
                one.encrypt_aead(&mut split, msg, &NONCE, AAD).unwrap();
                two.encrypt_aead_in_place(&mut joined, &NONCE, AAD).unwrap();
                if one.tag() != two.tag() {
                    return false;
                }
            } else {
                one.encrypt(&mut split, msg).unwrap();
                two.encrypt_in_place(&mut joined, msg.len()).unwrap();
            }
            if split != joined {
                return false;
            }
        }
        true
    }

    #[test]
    fn cbc_is_deterministic_per_iv() {
        let key = [0x24u8; 16];
        let plain = [0x5au8; 32];
        let mut ct = [[0u8; 32]; 3];
        for (i, iv) in [[0u8; 16], [0u8; 16], [1u8; 16]].iter().enumerate() {
            let mut enc = Cipher::new(Algorithm::Aes128Cbc, &key, Some(iv)).unwrap();
            enc.encrypt(&mut ct[i], &plain).unwrap();
        }
        assert_eq!(ct[0], ct[1]);
        assert_ne!(ct[0], ct[2]);
    }

    #[test]
    fn stream_double_encrypt_is_identity() {
        let plain = b"the keystream is its own inverse".to_vec();
        for algorithm in Algorithm::iter().filter(|a| a.mode() == Mode::Stream) {
            let mut data = plain.clone();
            fixture(algorithm).encrypt_in_place(&mut data, plain.len()).unwrap();
            assert_ne!(data, plain, "{}", algorithm.name());
            fixture(algorithm).decrypt_in_place(&mut data).unwrap();
            assert_eq!(data, plain, "{}", algorithm.name());
        }
    }

    #[test]
    fn chacha20_ietf_rfc7539() {
        let key: Vec<u8> = (0u8..32).collect();
        let iv = hex::decode("000000000000004a00000000").unwrap();
        let plain: &[u8] = b"Ladies and Gentlemen of the class of '99: \
If I could offer you only one tip for the future, sunscreen would be it.";

        let mut cipher =
            Cipher::with_counter(Algorithm::ChaCha20Ietf, &key, Some(&iv), 1).unwrap();
        let mut ct = vec![0u8; plain.len()];
        cipher.encrypt(&mut ct, plain).unwrap();
        assert_eq!(
            hex::encode(&ct),
            "6e2e359a2568f98041ba0728dd0d6981e97e7aec1d4360c20a27afccfd9fae0b\
             f91b65c5524733ab8f593dabcd62b3571639d624e65152ab8f530c359f0861d8\
             07ca0dbf500d6a6156a38e088a22b65e52bc514d16ccf806818ce91ab7793736\
             5af90bbf74a35be6b40b8eedf2785e42874d"
        );

        let mut cipher =
            Cipher::with_counter(Algorithm::ChaCha20Ietf, &key, Some(&iv), 1).unwrap();
        cipher.decrypt_in_place(&mut ct).unwrap();
        assert_eq!(ct, plain);
    }

    #[test]
    fn rc4_vector() {
        let mut cipher = Cipher::new(Algorithm::Rc4Key64, b"Password", None).unwrap();
        let mut data = *b"Message";
        cipher.encrypt_in_place(&mut data, 7).unwrap();
        assert_eq!(hex::encode(data), "6d8a1c142309c3");

        let mut cipher = Cipher::new(Algorithm::Rc4Key64, b"Password", None).unwrap();
        cipher.decrypt_in_place(&mut data).unwrap();
        assert_eq!(&data, b"Message");
    }

    #[test]
    fn reseed_restarts_the_keystream() {
        let key = [0x61u8; 32];
        let iv = [0x13u8; 8];
        let plain = *b"same bytes, same keystream";

        let mut cipher = Cipher::new(Algorithm::Salsa20Key256, &key, Some(&iv)).unwrap();
        let mut first = plain;
        cipher.encrypt_in_place(&mut first, plain.len()).unwrap();

        let mut second = plain;
        cipher.reseed(&iv, 0).unwrap();
        cipher.encrypt_in_place(&mut second, plain.len()).unwrap();
        assert_eq!(first, second);

        // a different IV diverges
        let mut third = plain;
        cipher.reseed(&[0x14u8; 8], 0).unwrap();
        cipher.encrypt_in_place(&mut third, plain.len()).unwrap();
        assert_ne!(first, third);
    }

    #[test]
    fn reseed_is_rejected_where_it_cannot_apply() {
        let mut rc4 = Cipher::new(Algorithm::Rc4Key128, &[1u8; 16], None).unwrap();
        assert_eq!(rc4.reseed(&[0u8; 8], 0), Err(ReseedError::NotStream));

        let mut cbc = Cipher::new(Algorithm::Aes128Cbc, &[1u8; 16], None).unwrap();
        assert_eq!(cbc.reseed(&[0u8; 16], 0), Err(ReseedError::NotStream));

        let mut chacha = Cipher::new(Algorithm::ChaCha8Key128, &[1u8; 16], None).unwrap();
        assert!(matches!(
            chacha.reseed(&[0u8; 12], 0),
            Err(ReseedError::IvLength(_))
        ));
    }

    #[test]
    fn init_validates_lengths() {
        assert!(Cipher::new(Algorithm::Aes128Cbc, &[0u8; 15], None).is_err());
        assert!(Cipher::new(Algorithm::Aes128Cbc, &[0u8; 16], Some(&[0u8; 12])).is_err());
        assert!(Cipher::new(Algorithm::Aes128Ctr, &[0u8; 16], Some(&[0u8; 16])).is_err());
        assert!(Cipher::new(Algorithm::Salsa20Key128, &[0u8; 16], Some(&[0u8; 7])).is_err());
        assert!(Cipher::new(Algorithm::Aes128Ctr, &[0u8; 16], Some(&[0u8; 12])).is_ok());
    }

    #[test]
    fn mode_mismatches_are_errors() {
        let mut gcm = fixture(Algorithm::Aes128Gcm);
        let mut buf = [0u8; 16];
        assert_eq!(
            gcm.encrypt(&mut buf, &[0u8; 16]),
            Err(EncryptError::WrongMode(Mode::Aead))
        );
        assert_eq!(
            gcm.decrypt(&mut buf, &[0u8; 16]),
            Err(DecryptError::WrongMode(Mode::Aead))
        );

        let mut cbc = fixture(Algorithm::Aes128Cbc);
        assert_eq!(
            cbc.encrypt_aead(&mut buf, &[0u8; 16], &NONCE, AAD),
            Err(EncryptError::WrongMode(Mode::Cbc))
        );
    }

    #[test]
    fn padding_is_ignored_outside_block_modes() {
        let mut ctr = fixture(Algorithm::Aes128Ctr);
        assert_eq!(ctr.set_padding(Padding::Size), Padding::None);
        assert_eq!(ctr.padding(), Padding::None);
        assert_eq!(ctr.pad_needed(5), 0);

        let mut cbc = fixture(Algorithm::Aes128Cbc);
        assert_eq!(cbc.set_padding(Padding::Ones), Padding::None);
        assert_eq!(cbc.set_padding(Padding::Size), Padding::Ones);
        assert_eq!(cbc.pad_needed(5), 11);
        assert_eq!(cbc.pad_needed(16), 16);
    }

    #[test]
    fn context_reports_its_identity() {
        let cipher = fixture(Algorithm::Camellia192Gcm);
        assert_eq!(cipher.algorithm(), Algorithm::Camellia192Gcm);
        assert_eq!(cipher.name(), "CAMELLIA-192-GCM");
        assert_eq!(cipher.mode(), Mode::Aead);
        assert_eq!(cipher.key_bits(), 192);
        assert_eq!(cipher.block_size(), 0);
        assert_eq!(cipher.iv_size(), 12);
        assert!(cipher.is_stream());
        assert_eq!(alloc::format!("{cipher:?}"), "Cipher(Camellia192Gcm)");
    }

    #[test]
    fn output_buffers_are_checked() {
        let mut enc = fixture(Algorithm::Aes128Cbc);
        enc.set_padding(Padding::Size);
        let mut small = [0u8; 16];
        assert!(matches!(
            enc.encrypt(&mut small, &[0u8; 16]),
            Err(EncryptError::BufferTooSmall { needed: 32, .. })
        ));
    }
}
