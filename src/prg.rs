use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use sha2::Sha256;

use crate::{
    constants::{PRG_BLOCK_SIZE, SEED_LEN},
    error::Error,
    lamport::definitions::Seed,
};

type HmacSha256 = Hmac<Sha256>;

/**
 * Deterministic byte stream derived from a 32 byte seed.
 *
 * Block `c` of the stream is `HMAC-SHA-256(key = seed, message = c as little-endian u64)`. Every request
 * to [`SeedPrg::fill`] starts at the next unused block; bytes of the last block that exceed the request
 * are discarded. Two instances created from the same seed therefore produce identical output for the
 * same sequence of requests.
 * */
#[derive(Clone)]
pub struct SeedPrg {
    mac: HmacSha256,
    counter: u64,
}

impl SeedPrg {
    pub fn new(seed: &[u8]) -> Result<Self, Error> {
        if seed.len() != SEED_LEN {
            return Err(Error::InvalidSeedLength {
                expected: SEED_LEN,
                actual: seed.len(),
            });
        }

        let mac = HmacSha256::new_from_slice(seed).map_err(|_| Error::InvalidSeedLength {
            expected: SEED_LEN,
            actual: seed.len(),
        })?;

        Ok(SeedPrg { mac, counter: 0 })
    }

    pub fn from_seed(seed: &Seed) -> Self {
        SeedPrg {
            mac: HmacSha256::new_from_slice(seed.as_slice())
                .expect("HMAC can take key of any size"),
            counter: 0,
        }
    }

    /// Number of blocks consumed so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn fill(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(PRG_BLOCK_SIZE) {
            let block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }

    fn next_block(&mut self) -> [u8; PRG_BLOCK_SIZE] {
        let mut mac = self.mac.clone();
        mac.update(&self.counter.to_le_bytes());
        self.counter += 1;

        let mut block = [0u8; PRG_BLOCK_SIZE];
        block.copy_from_slice(&mac.finalize().into_bytes());
        block
    }
}

impl RngCore for SeedPrg {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}

impl CryptoRng for SeedPrg {}
