pub const UINT16_SIZE: usize = 2;
pub const UINT32_SIZE: usize = 4;
pub const UINT64_SIZE: usize = 8;
pub const UINT256_SIZE: usize = 32;

/// Length of an account address in bytes.
pub const ADDR_LEN: usize = 20;

/// Account address, written as 20 raw bytes without a length prefix.
pub type Address = [u8; ADDR_LEN];

/// 256 bit hash, written as 32 raw bytes without a length prefix.
pub type Uint256 = [u8; UINT256_SIZE];

/// Add two numbers, returning the wrapped sum and whether the addition overflowed.
#[inline]
pub fn safe_add(a: u64, b: u64) -> (u64, bool) {
    a.overflowing_add(b)
}

#[cfg(test)]
mod tests {
    use super::safe_add;

    #[test]
    fn add_without_overflow() {
        assert_eq!(safe_add(2, 3), (5, false));
        assert_eq!(safe_add(u64::MAX - 1, 1), (u64::MAX, false));
    }

    #[test]
    fn add_with_overflow() {
        assert_eq!(safe_add(u64::MAX, 1), (0, true));
        assert!(safe_add(u64::MAX, u64::MAX).1);
    }
}
