use core::str::FromStr;

use rand::{CryptoRng, RngCore};
use signature::{Signer, Verifier};

use crate::{constants::SEED_LEN, error::Error, prg::SeedPrg};

use self::{
    definitions::{PrivateKey, PublicKey, Seed, Signature},
    parameters::DigestAlgorithm,
};

pub mod definitions;
pub mod keygen;
pub mod parameters;
pub mod signing;
pub mod verify;

/**
 * Lamport one-time signature engine for one digest algorithm.
 *
 * Two kinds of key material are supported behind the same signing and verification code:
 * - a full [`PrivateKey`] generated from a secure random source, and
 * - a 32 byte [`Seed`] which is expanded to the private key each time it is needed.
 *
 * The engine holds no state besides the digest choice. Every key, and every seed, must be used to sign
 * at most one message. The engine cannot detect reuse; keeping track of it is up to the caller.
 * */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LamportOts {
    algorithm: DigestAlgorithm,
}

impl LamportOts {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        LamportOts { algorithm }
    }

    pub fn from_name(name: &str) -> Result<Self, Error> {
        DigestAlgorithm::from_str(name).map(LamportOts::new)
    }

    pub fn from_type_id(type_id: u32) -> Result<Self, Error> {
        DigestAlgorithm::from_type_id(type_id).map(LamportOts::new)
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn hash_size(&self) -> usize {
        self.algorithm.hash_size()
    }

    pub fn bit_count(&self) -> usize {
        self.algorithm.bit_count()
    }

    /// Generates a full private key from the operating system's random source.
    #[cfg(feature = "std")]
    pub fn generate_keys(&self) -> (PrivateKey, PublicKey) {
        self.generate_keys_with_rng(&mut rand::rngs::OsRng)
    }

    pub fn generate_keys_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (PrivateKey, PublicKey) {
        let private_key = keygen::generate_private_key(self.algorithm, rng);
        let public_key = keygen::generate_public_key(&private_key);

        log::debug!(
            "Generated {} key pair (private key {} bytes, public key {} bytes)",
            self.algorithm,
            self.private_key_size(),
            self.public_key_size()
        );

        (private_key, public_key)
    }

    /// Generates a fresh seed from the operating system's random source and the public key it represents.
    #[cfg(feature = "std")]
    pub fn generate_keys_with_seed(&self) -> (Seed, PublicKey) {
        self.generate_keys_with_seed_and_rng(&mut rand::rngs::OsRng)
    }

    /// The expanded private key is dropped before returning; only the seed is kept.
    pub fn generate_keys_with_seed_and_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (Seed, PublicKey) {
        let seed = Seed::generate(rng);
        let public_key = keygen::generate_public_key(&keygen::expand_seed(self.algorithm, &seed));

        log::debug!(
            "Generated {} seed key pair (seed {} bytes, public key {} bytes)",
            self.algorithm,
            self.seed_size(),
            self.public_key_size()
        );

        (seed, public_key)
    }

    /// Expands `seed` to the private key it represents. Pure function of the seed and the digest.
    pub fn regenerate_private_key(&self, seed: &[u8]) -> Result<PrivateKey, Error> {
        let mut prg = SeedPrg::new(seed)?;
        let private_key = keygen::generate_private_key(self.algorithm, &mut prg);

        log::debug!(
            "Regenerated {} private key from seed using {} PRG blocks",
            self.algorithm,
            prg.counter()
        );

        Ok(private_key)
    }

    /// Derives the public key belonging to `private_key`.
    pub fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, Error> {
        if private_key.algorithm() != self.algorithm {
            return Err(Error::AlgorithmMismatch);
        }
        Ok(keygen::generate_public_key(private_key))
    }

    /// Signs the UTF-8 bytes of a text message, or any other byte string.
    pub fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature, Error> {
        let signature = signing::sign(self.algorithm, private_key, message)?;
        log::debug!(
            "Signed {} byte message with {} key",
            message.len(),
            self.algorithm
        );
        Ok(signature)
    }

    /// Same output as [`LamportOts::sign`] with the private key that `seed` represents.
    pub fn sign_with_seed(&self, message: &[u8], seed: &[u8]) -> Result<Signature, Error> {
        let private_key = self.regenerate_private_key(seed)?;
        self.sign(message, &private_key)
    }

    pub fn verify(&self, message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        verify::verify(self.algorithm, signature, public_key, message)
    }

    pub fn private_key_size(&self) -> usize {
        self.algorithm.private_key_size()
    }

    pub fn public_key_size(&self) -> usize {
        self.algorithm.public_key_size()
    }

    pub fn signature_size(&self) -> usize {
        self.algorithm.signature_size()
    }

    pub fn seed_size(&self) -> usize {
        SEED_LEN
    }
}

/// Either representation of a private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Full(PrivateKey),
    Seed(Seed),
}

/**
 * Private key material bound to an engine, usable through [`signature::Signer`].
 *
 * Usage is not tracked: signing a second message with the same key breaks the scheme's security.
 * */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    engine: LamportOts,
    key_material: KeyMaterial,
}

impl SigningKey {
    pub fn new(engine: LamportOts, key_material: KeyMaterial) -> Result<Self, Error> {
        if let KeyMaterial::Full(private_key) = &key_material {
            if private_key.algorithm() != engine.algorithm() {
                return Err(Error::AlgorithmMismatch);
            }
        }

        Ok(SigningKey {
            engine,
            key_material,
        })
    }

    #[cfg(feature = "std")]
    pub fn generate(engine: LamportOts) -> (Self, PublicKey) {
        Self::generate_with_rng(engine, &mut rand::rngs::OsRng)
    }

    /// Generates seed based key material.
    pub fn generate_with_rng<R: RngCore + CryptoRng + ?Sized>(
        engine: LamportOts,
        rng: &mut R,
    ) -> (Self, PublicKey) {
        let (seed, public_key) = engine.generate_keys_with_seed_and_rng(rng);
        let signing_key = SigningKey {
            engine,
            key_material: KeyMaterial::Seed(seed),
        };
        (signing_key, public_key)
    }

    pub fn engine(&self) -> LamportOts {
        self.engine
    }

    pub fn key_material(&self) -> &KeyMaterial {
        &self.key_material
    }

    pub fn verifying_key(&self) -> Result<PublicKey, Error> {
        match &self.key_material {
            KeyMaterial::Full(private_key) => self.engine.public_key(private_key),
            KeyMaterial::Seed(seed) => Ok(keygen::generate_public_key(&keygen::expand_seed(
                self.engine.algorithm(),
                seed,
            ))),
        }
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, message: &[u8]) -> Result<Signature, signature::Error> {
        let signature = match &self.key_material {
            KeyMaterial::Full(private_key) => self.engine.sign(message, private_key),
            KeyMaterial::Seed(seed) => self.engine.sign_with_seed(message, seed.as_slice()),
        }?;
        Ok(signature)
    }
}

impl Verifier<Signature> for PublicKey {
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), signature::Error> {
        if LamportOts::new(self.algorithm()).verify(message, signature, self) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}
