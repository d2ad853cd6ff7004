pub const FNV_OFFSET_BASIS: u32 = 2166136261;
pub const FNV_PRIME: u32 = 16777619;

/// FNV-1a over the unicode code points of `s`, not its utf-8 bytes.
pub fn fnv1a32(s: &str) -> u32 {
    s.chars().fold(FNV_OFFSET_BASIS, |acc, c| {
        (acc ^ c as u32).wrapping_mul(FNV_PRIME)
    })
}
