use tinyvec::ArrayVec;

pub const SEED_LEN: usize = 32;

/// Output size of the HMAC-SHA-256 block function used for seed expansion.
pub const PRG_BLOCK_SIZE: usize = 32;

pub const MAX_HASH_SIZE: usize = 64;

/// Two preimages (branch 0 and branch 1) per message digest bit.
pub const BRANCHES: usize = 2;

pub type Node = ArrayVec<[u8; MAX_HASH_SIZE]>;

pub const fn bit_count(hash_size: usize) -> usize {
    hash_size * 8
}

pub const fn private_key_length(hash_size: usize) -> usize {
    bit_count(hash_size)                                            // Message digest bits
        * BRANCHES                                                  // Branch 0 and 1
        * hash_size                                                 // Preimage
}

pub const fn public_key_length(hash_size: usize) -> usize {
    bit_count(hash_size) * BRANCHES * hash_size
}

pub const fn signature_length(hash_size: usize) -> usize {
    bit_count(hash_size)                                            // One revealed preimage per bit
        * hash_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(signature_length(32), 8192);
        assert_eq!(private_key_length(32), 16384);
        assert_eq!(public_key_length(32), 16384);

        assert_eq!(signature_length(48), 18432);
        assert_eq!(private_key_length(48), 36864);

        assert_eq!(signature_length(64), 32768);
        assert_eq!(public_key_length(64), 65536);
    }
}
