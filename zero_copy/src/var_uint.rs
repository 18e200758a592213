use core::fmt::{Debug, Formatter};

use crate::{DeserializeZeroCopy, Error, SerializeZeroCopy, ZeroCopySink, ZeroCopySource};

/// Largest encoded size of a [VarUint]: discriminator byte followed by a u64.
pub const MAX_VAR_UINT_SIZE: usize = 9;

const TAG_U16: u8 = 0xFD;
const TAG_U32: u8 = 0xFE;
const TAG_U64: u8 = 0xFF;

/// Variable length encoded u64.
///
/// Values below 0xFD are a single byte, larger values are a discriminator byte
/// (0xFD, 0xFE or 0xFF) followed by the value as Little Endian u16, u32 or u64.
/// Writers always choose the shortest form, readers accept any form.
#[derive(Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VarUint(pub u64);

impl VarUint {
    /// Number of bytes this value occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        if self.0 < TAG_U16 as u64 {
            1
        } else if self.0 <= u16::MAX as u64 {
            3
        } else if self.0 <= u32::MAX as u64 {
            5
        } else {
            MAX_VAR_UINT_SIZE
        }
    }

    /// Encode into the front of `buf`, which must be at least [MAX_VAR_UINT_SIZE] long.
    /// Returns the number of bytes actually used.
    pub(crate) fn encode_into(&self, buf: &mut [u8]) -> usize {
        let val = self.0;
        let size = self.encoded_len();
        match size {
            1 => buf[0] = val as u8,
            3 => {
                buf[0] = TAG_U16;
                buf[1..3].copy_from_slice(&(val as u16).to_le_bytes());
            }
            5 => {
                buf[0] = TAG_U32;
                buf[1..5].copy_from_slice(&(val as u32).to_le_bytes());
            }
            _ => {
                buf[0] = TAG_U64;
                buf[1..9].copy_from_slice(&val.to_le_bytes());
            }
        }
        size
    }

    pub(crate) fn read(src: &mut ZeroCopySource) -> Result<Self, Error> {
        let value = match src.next_byte()? {
            TAG_U16 => src.next_u16()? as u64,
            TAG_U32 => src.next_u32()? as u64,
            TAG_U64 => src.next_u64()?,
            b => b as u64,
        };

        #[cfg(feature = "defmt-extended")]
        defmt::trace!("read VarUint = {}", value);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("read VarUint = {}", value);

        Ok(VarUint(value))
    }
}

impl SerializeZeroCopy for VarUint {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_var_uint(self.0);
    }
}

impl<'i> DeserializeZeroCopy<'i> for VarUint {
    fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
        VarUint::read(src)
    }
}

impl Debug for VarUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VarUint {
    fn from(value: u64) -> Self {
        VarUint(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn encode(val: u64) -> ([u8; MAX_VAR_UINT_SIZE], usize) {
        let mut buf = [0xAA; MAX_VAR_UINT_SIZE];
        let len = VarUint(val).encode_into(&mut buf);
        (buf, len)
    }

    #[test]
    fn encoded_len_boundaries() {
        let cases = [
            (0, 1),
            (0xFC, 1),
            (0xFD, 3),
            (0xFFFF, 3),
            (0x1_0000, 5),
            (0xFFFF_FFFF, 5),
            (0x1_0000_0000, 9),
            (u64::MAX, 9),
        ];
        for (val, len) in cases {
            assert_eq!(VarUint(val).encoded_len(), len, "value {val:#x}");
            assert_eq!(encode(val).1, len, "value {val:#x}");
        }
    }

    #[test]
    fn single_byte() {
        let (buf, len) = encode(0xFC);
        assert_eq!(&buf[..len], &[0xFC]);
    }

    #[test]
    fn three_bytes() {
        let (buf, len) = encode(300);
        assert_eq!(&buf[..len], hex!("FD 2C 01"));
        let (buf, len) = encode(0xFD);
        assert_eq!(&buf[..len], hex!("FD FD 00"));
    }

    #[test]
    fn five_bytes() {
        let (buf, len) = encode(0x1_0000);
        assert_eq!(&buf[..len], hex!("FE 00 00 01 00"));
    }

    #[test]
    fn nine_bytes() {
        let (buf, len) = encode(0x0102_0304_0506_0708);
        assert_eq!(&buf[..len], hex!("FF 08 07 06 05 04 03 02 01"));
    }

    #[test]
    fn encode_leaves_tail_untouched() {
        let (buf, len) = encode(7);
        assert_eq!(len, 1);
        assert_eq!(&buf[1..], &[0xAA; 8]);
    }

    #[test]
    fn read_accepts_wide_encoding() {
        let buf = hex!("FD 05 00 FE 01 00 00 00 FF 02 00 00 00 00 00 00 00");
        let mut src = ZeroCopySource::new(&buf);
        assert_eq!(VarUint::read(&mut src), Ok(VarUint(5)));
        assert_eq!(VarUint::read(&mut src), Ok(VarUint(1)));
        assert_eq!(VarUint::read(&mut src), Ok(VarUint(2)));
        assert_eq!(src.len(), 0);
    }

    #[test]
    fn read_truncated_payload() {
        let buf = hex!("FE 01 02");
        let mut src = ZeroCopySource::new(&buf);
        assert_eq!(VarUint::read(&mut src), Err(Error::EndOfData));
        assert_eq!(src.pos(), 3);
    }

    #[test]
    fn read_empty() {
        let mut src = ZeroCopySource::new(&[]);
        assert_eq!(VarUint::read(&mut src), Err(Error::EndOfData));
        assert_eq!(src.pos(), 0);
    }
}
