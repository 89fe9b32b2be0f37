use alloc::vec::Vec;
use core::{convert::TryFrom, fmt, slice::ChunksExact};

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    constants::{Node, BRANCHES, MAX_HASH_SIZE, SEED_LEN},
    error::Error,
    util::{helper::read_and_advance, ArrayVecZeroize},
};

use super::parameters::DigestAlgorithm;

pub(crate) type Preimage = ArrayVecZeroize<u8, MAX_HASH_SIZE>;

/**
 * The only secret persisted in seed mode. It deterministically expands to the full private key.
 *
 * Comparison runs in constant time; the content is wiped on drop and never printed by `Debug`.
 * */
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut seed = Seed([0u8; SEED_LEN]);
        rng.fill_bytes(&mut seed.0);
        seed
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(data: [u8; SEED_LEN]) -> Self {
        Seed(data)
    }
}

impl TryFrom<&[u8]> for Seed {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.len() != SEED_LEN {
            return Err(Error::InvalidSeedLength {
                expected: SEED_LEN,
                actual: data.len(),
            });
        }

        let mut seed = Seed([0u8; SEED_LEN]);
        seed.0.copy_from_slice(data);
        Ok(seed)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/**
 * Full private key: for every digest bit one pair of `hash_size` byte preimages, branch 0 first.
 *
 * A private key must sign at most one message. Signing a second message reveals preimages of both
 * branches and allows forgeries; this is not tracked by the key.
 * */
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    algorithm: DigestAlgorithm,
    pairs: Vec<[Preimage; BRANCHES]>,
}

impl PrivateKey {
    pub(crate) fn new(algorithm: DigestAlgorithm, pairs: Vec<[Preimage; BRANCHES]>) -> Self {
        debug_assert_eq!(pairs.len(), algorithm.bit_count());
        PrivateKey { algorithm, pairs }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn bit_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn preimage(&self, position: usize, branch: usize) -> &[u8] {
        self.pairs[position][branch].as_slice()
    }

    pub(crate) fn pairs(&self) -> &[[Preimage; BRANCHES]] {
        &self.pairs
    }

    pub fn to_binary_representation(&self) -> Zeroizing<Vec<u8>> {
        let mut result = Zeroizing::new(Vec::with_capacity(self.algorithm.private_key_size()));

        for pair in self.pairs.iter() {
            for preimage in pair.iter() {
                result.extend_from_slice(preimage.as_slice());
            }
        }

        result
    }

    pub fn from_binary_representation(
        algorithm: DigestAlgorithm,
        data: &[u8],
    ) -> Result<Self, Error> {
        check_length(algorithm.private_key_size(), data)?;

        let hash_size = algorithm.hash_size();
        let mut index = 0;
        let mut pairs = Vec::with_capacity(algorithm.bit_count());

        for _ in 0..algorithm.bit_count() {
            let mut pair = [Preimage::default(); BRANCHES];
            for preimage in pair.iter_mut() {
                *preimage = Preimage::from_slice(read_and_advance(data, hash_size, &mut index));
            }
            pairs.push(pair);
        }

        Ok(PrivateKey::new(algorithm, pairs))
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && bool::from(
                self.to_binary_representation()
                    .as_slice()
                    .ct_eq(other.to_binary_representation().as_slice()),
            )
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Hashes of every private key preimage, in the same order as the private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    algorithm: DigestAlgorithm,
    pairs: Vec<[Node; BRANCHES]>,
}

impl PublicKey {
    pub(crate) fn new(algorithm: DigestAlgorithm, pairs: Vec<[Node; BRANCHES]>) -> Self {
        debug_assert_eq!(pairs.len(), algorithm.bit_count());
        PublicKey { algorithm, pairs }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn bit_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn node(&self, position: usize, branch: usize) -> &[u8] {
        self.pairs[position][branch].as_slice()
    }

    pub(crate) fn pairs(&self) -> &[[Node; BRANCHES]] {
        &self.pairs
    }

    pub fn to_binary_representation(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.algorithm.public_key_size());

        for pair in self.pairs.iter() {
            for node in pair.iter() {
                result.extend_from_slice(node.as_slice());
            }
        }

        result
    }

    pub fn from_binary_representation(
        algorithm: DigestAlgorithm,
        data: &[u8],
    ) -> Result<Self, Error> {
        check_length(algorithm.public_key_size(), data)?;

        let hash_size = algorithm.hash_size();
        let mut index = 0;
        let mut pairs = Vec::with_capacity(algorithm.bit_count());

        for _ in 0..algorithm.bit_count() {
            let mut pair = [Node::new(); BRANCHES];
            for node in pair.iter_mut() {
                node.extend_from_slice(read_and_advance(data, hash_size, &mut index));
            }
            pairs.push(pair);
        }

        Ok(PublicKey::new(algorithm, pairs))
    }
}

/**
 * One revealed preimage per digest bit, concatenated.
 *
 * The container accepts arbitrary bytes; a signature of the wrong length is only rejected at
 * verification time, where it yields `false`.
 * */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    data: Vec<u8>,
}

impl Signature {
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Number of complete `hash_size` byte elements.
    pub fn element_count(&self, hash_size: usize) -> usize {
        self.data.len() / hash_size
    }

    pub fn elements(&self, hash_size: usize) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(hash_size)
    }
}

impl From<Vec<u8>> for Signature {
    fn from(data: Vec<u8>) -> Self {
        Signature { data }
    }
}

impl From<&[u8]> for Signature {
    fn from(data: &[u8]) -> Self {
        Signature {
            data: data.to_vec(),
        }
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl signature::Signature for Signature {
    fn from_bytes(bytes: &[u8]) -> Result<Self, signature::Error> {
        Ok(Signature::from(bytes))
    }
}

fn check_length(expected: usize, data: &[u8]) -> Result<(), Error> {
    if data.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
