/* Treat byte_string as a sequence of bits, most significant bit of each byte first, and return bit i. */
pub fn bit(byte_string: &[u8], i: usize) -> usize {
    let index = i / 8;
    assert!(index < byte_string.len());

    let shift = 7 - (i % 8);

    ((byte_string[index] >> shift) & 1) as usize
}
