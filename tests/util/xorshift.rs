/// The 32-bit variant of the Xorshift PRNG algorithm.
///
/// Used to fill test files with bytes that make misplaced offsets show up as mismatches.
#[repr(transparent)]
#[derive(Copy, Clone, Debug)]
pub struct Xorshift32(pub u32);
impl Xorshift32 {
    pub fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}
impl Iterator for Xorshift32 {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next())
    }
}

/// Deterministic pseudorandom content of the given length.
pub fn pattern(len: usize) -> Vec<u8> {
    Xorshift32(0x2545_f491).take(len).map(|x| x as u8).collect()
}
