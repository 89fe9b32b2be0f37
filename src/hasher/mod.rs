use crate::constants::Node;

mod sha;

pub use sha::{Sha256Hasher, Sha384Hasher, Sha512Hasher};

/**
 *
 * This trait is used inside the library to generate hashes. Standard software implementations exist for
 * the SHA-2 family (`Sha256Hasher`, `Sha384Hasher`, `Sha512Hasher`).
 * */
pub trait Hasher: Default + Clone + Send {
    const OUTPUT_SIZE: u16;

    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Node;
    fn finalize_reset(&mut self) -> Node;

    fn chain(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    fn hash(data: &[u8]) -> Node {
        Self::default().chain(data).finalize()
    }
}
