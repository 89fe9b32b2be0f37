use alloc::vec::Vec;

use crate::{error::Error, util::coef::bit};

use super::{
    definitions::{PrivateKey, Signature},
    parameters::DigestAlgorithm,
};

/// Reveals, for every bit of the message digest, the preimage of the branch selected by that bit.
pub fn sign(
    algorithm: DigestAlgorithm,
    private_key: &PrivateKey,
    message: &[u8],
) -> Result<Signature, Error> {
    if private_key.algorithm() != algorithm {
        return Err(Error::AlgorithmMismatch);
    }

    let message_hash = algorithm.digest(message);
    let mut signature_data = Vec::with_capacity(algorithm.signature_size());

    for (i, pair) in private_key.pairs().iter().enumerate() {
        let branch = bit(message_hash.as_slice(), i);
        signature_data.extend_from_slice(pair[branch].as_slice());
    }

    Ok(Signature::from(signature_data))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::sign;
    use crate::{
        error::Error,
        lamport::{definitions::Seed, keygen},
        util::coef::bit,
        DigestAlgorithm,
    };

    const MESSAGE: &[u8] = b"Kryptografia post-kwantowa 2026";

    #[test]
    fn test_signature_selects_preimages_by_digest_bits() {
        let algorithm = DigestAlgorithm::Sha512;
        let private_key = keygen::generate_private_key(algorithm, &mut StdRng::seed_from_u64(3));

        let signature = sign(algorithm, &private_key, MESSAGE).unwrap();
        let message_hash = algorithm.digest(MESSAGE);

        assert_eq!(signature.as_slice().len(), algorithm.signature_size());
        for (i, element) in signature.elements(algorithm.hash_size()).enumerate() {
            assert_eq!(
                element,
                private_key.preimage(i, bit(message_hash.as_slice(), i))
            );
        }
    }

    #[test]
    fn test_known_answer_from_seed() {
        let mut seed = [0u8; 32];
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let private_key = keygen::expand_seed(DigestAlgorithm::Sha256, &Seed::from(seed));

        // SHA-256 of the message starts with 0xb1 = 0b1011_0001.
        let signature = sign(DigestAlgorithm::Sha256, &private_key, MESSAGE).unwrap();
        let mut elements = signature.elements(32);

        assert_eq!(
            elements.next().unwrap(),
            hex::decode("3b345d4e3f7a9922d8942f7c4f9c46a36307684beb1c02f98dba9327be8e1617")
                .unwrap()
                .as_slice()
        );
        assert_eq!(
            elements.next().unwrap(),
            hex::decode("be563a677f0334d6c3b6b698db0ba3baa59ee0f41841cc64677e64e16c27ddfb")
                .unwrap()
                .as_slice()
        );
    }

    #[test]
    fn test_algorithm_mismatch() {
        let private_key =
            keygen::generate_private_key(DigestAlgorithm::Sha256, &mut StdRng::seed_from_u64(4));

        assert_eq!(
            sign(DigestAlgorithm::Sha384, &private_key, MESSAGE),
            Err(Error::AlgorithmMismatch)
        );
    }
}
