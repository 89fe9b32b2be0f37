//! Lamport one-time signatures over SHA-256, SHA-384 and SHA-512.
//!
//! Keys are either generated in full from a secure random source, or represented by a 32 byte seed
//! which is expanded with an HMAC-SHA-256 counter mode PRG whenever the private key is needed.
//!
//! ```
//! use lamport_ots::{DigestAlgorithm, LamportOts};
//!
//! let lamport = LamportOts::new(DigestAlgorithm::Sha256);
//! let message = "Kryptografia post-kwantowa 2026".as_bytes();
//!
//! let (seed, public_key) = lamport.generate_keys_with_seed();
//! let signature = lamport.sign_with_seed(message, seed.as_slice()).unwrap();
//!
//! assert!(lamport.verify(message, &signature, &public_key));
//! assert_eq!(lamport.signature_size(), 8192);
//! ```
//!
//! A key, or a seed, must never sign more than one message.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

mod constants;
mod error;
pub mod hasher;
mod lamport;
mod prg;
mod util;

pub use signature;

pub use hasher::Hasher;

pub use crate::constants::{MAX_HASH_SIZE, SEED_LEN};
pub use crate::error::Error;
pub use crate::hasher::{Sha256Hasher, Sha384Hasher, Sha512Hasher};
pub use crate::prg::SeedPrg;

pub use crate::lamport::definitions::{PrivateKey, PublicKey, Seed, Signature};
pub use crate::lamport::parameters::DigestAlgorithm;
pub use crate::lamport::{KeyMaterial, LamportOts, SigningKey};
