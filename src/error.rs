use core::fmt::{Display, Formatter, Result};

/// Errors reported by key generation, seed expansion and signing.
///
/// Verification never produces an error; an invalid signature is reported as `false`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The digest selector does not name SHA-256, SHA-384 or SHA-512.
    UnsupportedDigest,
    /// A seed was not exactly [`SEED_LEN`](crate::SEED_LEN) bytes long.
    InvalidSeedLength { expected: usize, actual: usize },
    /// A binary key representation has the wrong length for its digest.
    InvalidLength { expected: usize, actual: usize },
    /// Key material was generated for a different digest than the engine uses.
    AlgorithmMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnsupportedDigest => write!(f, "unsupported digest algorithm"),
            Self::InvalidSeedLength { expected, actual } => write!(
                f,
                "seed must be exactly {} bytes, got {}",
                expected, actual
            ),
            Self::InvalidLength { expected, actual } => {
                write!(f, "expected {} bytes of key data, got {}", expected, actual)
            }
            Self::AlgorithmMismatch => {
                write!(f, "key material does not match the digest algorithm")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for signature::Error {
    fn from(error: Error) -> Self {
        #[cfg(feature = "std")]
        return signature::Error::from_source(error);
        #[cfg(not(feature = "std"))]
        {
            let _ = error;
            signature::Error::new()
        }
    }
}
