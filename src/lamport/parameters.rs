use core::{convert::TryFrom, str::FromStr};

use crate::{
    constants::{self, Node, SEED_LEN},
    error::Error,
    hasher::{Hasher, Sha256Hasher, Sha384Hasher, Sha512Hasher},
};

/// Specifies the hash function. Its output size determines the shape of keys and signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha256 = 1,
    Sha384 = 2,
    Sha512 = 3,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 3] = [
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    pub fn from_type_id(type_id: u32) -> Result<Self, Error> {
        match type_id {
            1 => Ok(DigestAlgorithm::Sha256),
            2 => Ok(DigestAlgorithm::Sha384),
            3 => Ok(DigestAlgorithm::Sha512),
            _ => Err(Error::UnsupportedDigest),
        }
    }

    pub fn type_id(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest output size in bytes.
    pub fn hash_size(&self) -> usize {
        let output_size = match self {
            DigestAlgorithm::Sha256 => Sha256Hasher::OUTPUT_SIZE,
            DigestAlgorithm::Sha384 => Sha384Hasher::OUTPUT_SIZE,
            DigestAlgorithm::Sha512 => Sha512Hasher::OUTPUT_SIZE,
        };
        output_size as usize
    }

    /// Number of digest bits, which is also the number of key pairs and signature elements.
    pub fn bit_count(&self) -> usize {
        constants::bit_count(self.hash_size())
    }

    pub fn private_key_size(&self) -> usize {
        constants::private_key_length(self.hash_size())
    }

    pub fn public_key_size(&self) -> usize {
        constants::public_key_length(self.hash_size())
    }

    pub fn signature_size(&self) -> usize {
        constants::signature_length(self.hash_size())
    }

    pub fn seed_size(&self) -> usize {
        SEED_LEN
    }

    pub fn digest(&self, data: &[u8]) -> Node {
        match self {
            DigestAlgorithm::Sha256 => Sha256Hasher::hash(data),
            DigestAlgorithm::Sha384 => Sha384Hasher::hash(data),
            DigestAlgorithm::Sha512 => Sha512Hasher::hash(data),
        }
    }
}

impl Default for DigestAlgorithm {
    fn default() -> Self {
        DigestAlgorithm::Sha256
    }
}

impl core::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for DigestAlgorithm {
    type Error = Error;

    fn try_from(type_id: u32) -> Result<Self, Self::Error> {
        DigestAlgorithm::from_type_id(type_id)
    }
}

/// Accepts the algorithm names case-insensitively, with or without a separator: `SHA256`, `sha-384`, `SHA_512`.
impl FromStr for DigestAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        fn normalized(name: &str) -> impl Iterator<Item = u8> + Clone + '_ {
            name.bytes()
                .filter(|byte| *byte != b'-' && *byte != b'_')
                .map(|byte| byte.to_ascii_uppercase())
        }

        DigestAlgorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| normalized(name).eq(normalized(algorithm.name())))
            .ok_or(Error::UnsupportedDigest)
    }
}
