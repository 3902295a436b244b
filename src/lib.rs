//! One-shot symmetric cipher engine.
//!
//! `cifra` puts eight cipher families — AES, ARIA, Camellia, Twofish,
//! Blowfish, DES/3DES, XTEA, RC4, Salsa20 and the ChaCha variants — behind
//! a single [`Cipher`] context driving ECB, CBC (with three padding
//! schemes), CTR, GCM, ChaCha20-Poly1305 and plain stream modes. Algorithms
//! are addressed through the closed [`Algorithm`] catalog, by variant or by
//! canonical name:
//!
//! ```
//! use cifra::{Algorithm, Cipher, Padding};
//!
//! let algorithm = Algorithm::from_name("AES-256-CBC").unwrap();
//! let key = algorithm.generate_key();
//! let iv = algorithm.generate_iv();
//!
//! let mut enc = Cipher::new(algorithm, &key, Some(&iv)).unwrap();
//! enc.set_padding(Padding::Size);
//! let msg = b"attack at dawn";
//! let mut ciphertext = vec![0u8; enc.encrypted_len(msg.len())];
//! let written = enc.encrypt(&mut ciphertext, msg).unwrap();
//!
//! let mut dec = Cipher::new(algorithm, &key, Some(&iv)).unwrap();
//! dec.set_padding(Padding::Size);
//! let mut plaintext = vec![0u8; written];
//! let n = dec.decrypt(&mut plaintext, &ciphertext).unwrap();
//! assert_eq!(&plaintext[..n], msg);
//! ```
//!
//! The AEAD algorithms take their nonce and associated data with each
//! message and leave the authentication tag in the context:
//!
//! ```
//! use cifra::{Algorithm, Cipher};
//!
//! let key = Algorithm::ChaCha20Poly1305.generate_key();
//! let nonce = Algorithm::ChaCha20Poly1305.generate_iv();
//! let mut seal = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
//! let mut ct = vec![0u8; 12];
//! seal.encrypt_aead(&mut ct, b"hello world!", &nonce, b"header").unwrap();
//! let tag = seal.tag().to_vec();
//!
//! let mut open = Cipher::new(Algorithm::ChaCha20Poly1305, &key, None).unwrap();
//! let mut pt = vec![0u8; 12];
//! open.decrypt_aead(&mut pt, &ct, &nonce, b"header").unwrap();
//! assert!(open.verify_tag(&tag));
//! assert_eq!(&pt, b"hello world!");
//! ```
//!
//! CBC, CTR and the stream modes keep their chaining state in the context,
//! so consecutive calls behave like one longer message. AEAD tag
//! verification is the caller's job: `decrypt_aead` never fails on a bad
//! tag, [`Cipher::verify_tag`] does.
//!
//! This is a clear reference implementation. It is not hardened against
//! side channels beyond constant-time tag comparison.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod algorithm;
pub use algorithm::Algorithm;

mod cipher;
pub use self::cipher::Cipher;

pub mod constant_time;

pub mod error;
pub use error::{DecryptError, EncryptError, InitError, InvalidAlgorithmError};

mod mode;
pub use mode::Mode;

mod padding;
pub use padding::Padding;

mod primitive;

mod rand;
pub use rand::Random;
