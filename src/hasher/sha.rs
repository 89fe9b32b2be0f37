use digest::Digest;

use crate::constants::Node;

use super::Hasher;

macro_rules! define_sha2_hasher {
    ($name:ident, $inner:ty, $output_size:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Default, Clone)]
        pub struct $name {
            hasher: $inner,
        }

        impl Hasher for $name {
            const OUTPUT_SIZE: u16 = $output_size;

            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.hasher, data);
            }

            fn finalize(self) -> Node {
                let mut node = Node::new();
                node.extend_from_slice(self.hasher.finalize().as_slice());
                node
            }

            fn finalize_reset(&mut self) -> Node {
                let mut node = Node::new();
                node.extend_from_slice(self.hasher.finalize_reset().as_slice());
                node
            }
        }
    };
}

define_sha2_hasher!(
    Sha256Hasher,
    sha2::Sha256,
    32,
    "Extension of [`sha2::Sha256`], which can be passed into the library, as it implements the [`Hasher`] trait."
);
define_sha2_hasher!(
    Sha384Hasher,
    sha2::Sha384,
    48,
    "Extension of [`sha2::Sha384`], which can be passed into the library, as it implements the [`Hasher`] trait."
);
define_sha2_hasher!(
    Sha512Hasher,
    sha2::Sha512,
    64,
    "Extension of [`sha2::Sha512`], which can be passed into the library, as it implements the [`Hasher`] trait."
);
