use subtle::ConstantTimeEq;

use crate::{
    hasher::{Hasher, Sha256Hasher, Sha384Hasher, Sha512Hasher},
    util::coef::bit,
};

use super::{
    definitions::{PublicKey, Signature},
    parameters::DigestAlgorithm,
};

/// Returns `false` for any structural or cryptographic mismatch. Never panics on the signature content.
pub fn verify(
    algorithm: DigestAlgorithm,
    signature: &Signature,
    public_key: &PublicKey,
    message: &[u8],
) -> bool {
    if public_key.algorithm() != algorithm || public_key.bit_count() != algorithm.bit_count() {
        log::trace!("Rejecting signature: public key is not a {} key", algorithm);
        return false;
    }

    if signature.as_slice().len() != algorithm.signature_size() {
        log::trace!(
            "Rejecting signature: expected {} bytes, got {}",
            algorithm.signature_size(),
            signature.as_slice().len()
        );
        return false;
    }

    match algorithm {
        DigestAlgorithm::Sha256 => verify_elements::<Sha256Hasher>(signature, public_key, message),
        DigestAlgorithm::Sha384 => verify_elements::<Sha384Hasher>(signature, public_key, message),
        DigestAlgorithm::Sha512 => verify_elements::<Sha512Hasher>(signature, public_key, message),
    }
}

fn verify_elements<H: Hasher>(signature: &Signature, public_key: &PublicKey, message: &[u8]) -> bool {
    let mut hasher = H::default();

    hasher.update(message);
    let message_hash = hasher.finalize_reset();

    let elements = signature.elements(H::OUTPUT_SIZE as usize);

    for (i, (revealed, pair)) in elements.zip(public_key.pairs().iter()).enumerate() {
        let branch = bit(message_hash.as_slice(), i);

        hasher.update(revealed);
        let candidate = hasher.finalize_reset();

        if candidate.as_slice().ct_eq(pair[branch].as_slice()).unwrap_u8() == 0 {
            log::trace!("Rejecting signature: element {} does not match", i);
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::verify;
    use crate::{
        lamport::{definitions::Signature, keygen, signing::sign},
        DigestAlgorithm,
    };

    const MESSAGE: &[u8] = b"Kryptografia post-kwantowa 2026";

    macro_rules! generate_test {
        ($name:ident, $algorithm:expr) => {
            #[test]
            fn $name() {
                let algorithm = $algorithm;
                let mut rng = StdRng::seed_from_u64(algorithm.type_id() as u64);
                let private_key = keygen::generate_private_key(algorithm, &mut rng);
                let public_key = keygen::generate_public_key(&private_key);

                let mut message = MESSAGE.to_vec();
                let signature = sign(algorithm, &private_key, &message).unwrap();

                assert!(verify(algorithm, &signature, &public_key, &message) == true);

                message[0] ^= 1;
                assert!(verify(algorithm, &signature, &public_key, &message) == false);
            }
        };
    }

    generate_test!(sha256_verify_test, DigestAlgorithm::Sha256);
    generate_test!(sha384_verify_test, DigestAlgorithm::Sha384);
    generate_test!(sha512_verify_test, DigestAlgorithm::Sha512);

    #[test]
    fn test_wrong_length_fails_closed() {
        let algorithm = DigestAlgorithm::Sha256;
        let private_key = keygen::generate_private_key(algorithm, &mut StdRng::seed_from_u64(5));
        let public_key = keygen::generate_public_key(&private_key);
        let signature = sign(algorithm, &private_key, MESSAGE).unwrap();
        let bytes = signature.as_slice();

        let truncated = Signature::from(&bytes[..bytes.len() - algorithm.hash_size()]);
        assert!(!verify(algorithm, &truncated, &public_key, MESSAGE));

        let one_byte_short = Signature::from(&bytes[..bytes.len() - 1]);
        assert!(!verify(algorithm, &one_byte_short, &public_key, MESSAGE));

        let mut extended = bytes.to_vec();
        extended.extend_from_slice(&[0u8; 32]);
        assert!(!verify(algorithm, &Signature::from(extended), &public_key, MESSAGE));

        assert!(!verify(algorithm, &Signature::default(), &public_key, MESSAGE));
    }

    #[test]
    fn test_public_key_of_other_digest_is_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let private_key = keygen::generate_private_key(DigestAlgorithm::Sha256, &mut rng);
        let public_key = keygen::generate_public_key(&private_key);
        let signature = sign(DigestAlgorithm::Sha256, &private_key, MESSAGE).unwrap();

        assert!(!verify(DigestAlgorithm::Sha512, &signature, &public_key, MESSAGE));
    }
}
