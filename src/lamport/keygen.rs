use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use crate::{
    constants::{Node, BRANCHES},
    hasher::{Hasher, Sha256Hasher, Sha384Hasher, Sha512Hasher},
    prg::SeedPrg,
};

use super::{
    definitions::{Preimage, PrivateKey, PublicKey, Seed},
    parameters::DigestAlgorithm,
};

/// Draws every preimage from `rng`, one request of `hash_size` bytes per preimage, position-major with
/// branch 0 before branch 1.
pub fn generate_private_key<R: RngCore + CryptoRng + ?Sized>(
    algorithm: DigestAlgorithm,
    rng: &mut R,
) -> PrivateKey {
    let hash_size = algorithm.hash_size();
    let mut pairs = Vec::with_capacity(algorithm.bit_count());

    for _ in 0..algorithm.bit_count() {
        let mut pair = [Preimage::with_len(hash_size); BRANCHES];
        for preimage in pair.iter_mut() {
            rng.fill_bytes(preimage.as_mut_slice());
        }
        pairs.push(pair);
    }

    PrivateKey::new(algorithm, pairs)
}

/// Reconstructs the private key that `seed` represents.
pub fn expand_seed(algorithm: DigestAlgorithm, seed: &Seed) -> PrivateKey {
    let mut prg = SeedPrg::from_seed(seed);
    let private_key = generate_private_key(algorithm, &mut prg);

    log::debug!(
        "Expanded {} private key from seed using {} PRG blocks",
        algorithm,
        prg.counter()
    );

    private_key
}

pub fn generate_public_key(private_key: &PrivateKey) -> PublicKey {
    match private_key.algorithm() {
        DigestAlgorithm::Sha256 => hash_preimages::<Sha256Hasher>(private_key),
        DigestAlgorithm::Sha384 => hash_preimages::<Sha384Hasher>(private_key),
        DigestAlgorithm::Sha512 => hash_preimages::<Sha512Hasher>(private_key),
    }
}

fn hash_preimages<H: Hasher>(private_key: &PrivateKey) -> PublicKey {
    let mut hasher = H::default();
    let mut pairs = Vec::with_capacity(private_key.bit_count());

    for private_pair in private_key.pairs().iter() {
        let mut pair = [Node::new(); BRANCHES];
        for (node, preimage) in pair.iter_mut().zip(private_pair.iter()) {
            hasher.update(preimage.as_slice());
            *node = hasher.finalize_reset();
        }
        pairs.push(pair);
    }

    PublicKey::new(private_key.algorithm(), pairs)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, CryptoRng, RngCore, SeedableRng};

    use super::*;

    /// Fake randomness source: byte `k` of the stream is `k mod 251`.
    struct CountingRng(u64);

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let mut bytes = [0u8; 8];
            self.fill_bytes(&mut bytes);
            u64::from_le_bytes(bytes)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest.iter_mut() {
                *byte = (self.0 % 251) as u8;
                self.0 += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for CountingRng {}

    #[test]
    fn test_private_key_layout() {
        let private_key = generate_private_key(DigestAlgorithm::Sha256, &mut CountingRng(0));

        assert_eq!(private_key.bit_count(), 256);
        assert_eq!(private_key.preimage(0, 0)[0], 0);
        assert_eq!(private_key.preimage(0, 1)[0], 32);
        assert_eq!(private_key.preimage(1, 0)[0], 64);
        assert_eq!(private_key.preimage(1, 1)[31], 127);
    }

    #[test]
    fn test_public_key_is_hash_of_preimages() {
        let mut rng = StdRng::seed_from_u64(42);

        for algorithm in DigestAlgorithm::ALL {
            let private_key = generate_private_key(algorithm, &mut rng);
            let public_key = generate_public_key(&private_key);

            assert_eq!(public_key.algorithm(), algorithm);
            assert_eq!(public_key.bit_count(), algorithm.bit_count());

            for position in [0, algorithm.bit_count() / 2, algorithm.bit_count() - 1] {
                for branch in 0..BRANCHES {
                    assert_eq!(
                        public_key.node(position, branch),
                        algorithm.digest(private_key.preimage(position, branch)).as_slice()
                    );
                }
            }
        }
    }

    #[test]
    fn test_expand_seed_known_answer() {
        let mut seed = [0u8; 32];
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let seed = Seed::from(seed);

        // A 48 byte preimage takes two PRG blocks; the tail of the second block is dropped.
        let private_key = expand_seed(DigestAlgorithm::Sha384, &seed);
        assert_eq!(
            private_key.preimage(0, 0),
            hex::decode(
                "9f0cd9b94097fe4929918d2b8942b34439574261a35dc50163f06c67d4e48899\
                 3b345d4e3f7a9922d8942f7c4f9c46a3"
            )
            .unwrap()
            .as_slice()
        );

        let public_key = generate_public_key(&private_key);
        assert_eq!(
            public_key.node(0, 0),
            hex::decode(
                "d203361cc91630e8cce61fca2d99503e1e2f24961720f1e13642071fa8f94ada\
                 66ede169cb2cbc62f1f525502c301435"
            )
            .unwrap()
            .as_slice()
        );
        assert_eq!(
            public_key.node(0, 1),
            hex::decode(
                "32f63f7c048e3de7b613c50c38767469e0415112980a7088b16c6ea1576093e8\
                 3b321dcda458bf1c78f4792d7d81f379"
            )
            .unwrap()
            .as_slice()
        );
    }

    #[test]
    fn test_expand_seed_is_deterministic() {
        let seed = Seed::generate(&mut StdRng::seed_from_u64(7));

        for algorithm in DigestAlgorithm::ALL {
            assert_eq!(
                expand_seed(algorithm, &seed),
                expand_seed(algorithm, &seed)
            );
        }
    }
}
