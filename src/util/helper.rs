/// Returns the next `length` bytes of `src` starting at `index` and advances `index` past them.
pub fn read_and_advance<'a>(src: &'a [u8], length: usize, index: &mut usize) -> &'a [u8] {
    let result = &src[*index..*index + length];
    *index += length;
    result
}
