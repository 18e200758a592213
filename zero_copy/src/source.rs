use crate::common::{safe_add, Address, Uint256, ADDR_LEN, UINT256_SIZE};
use crate::var_uint::VarUint;
use crate::{DeserializeZeroCopy, Error};

/// Sequential reader over a borrowed byte slice. All numbers are read in Little Endian.
///
/// Reading past the end never panics: the cursor is clamped to the end of the data and
/// [Error::EndOfData] is returned. Values borrowed from the source (slices, strings) point
/// directly into the original data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZeroCopySource<'i> {
    buf: &'i [u8],
    /// Next byte to read from, never exceeds buf.len()
    off: u64,
}

impl<'i> ZeroCopySource<'i> {
    pub fn new(buf: &'i [u8]) -> Self {
        Self { buf, off: 0 }
    }

    /// Number of bytes not yet read.
    pub fn len(&self) -> u64 {
        self.size().saturating_sub(self.off)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the whole underlying slice, not affected by reads.
    pub fn size(&self) -> u64 {
        self.buf.len() as u64
    }

    /// Current cursor position.
    pub fn pos(&self) -> u64 {
        self.off
    }

    pub fn bytes(&self) -> &'i [u8] {
        self.buf
    }

    /// Unread part of the underlying slice.
    pub fn off_bytes(&self) -> &'i [u8] {
        &self.buf[self.off as usize..]
    }

    /// Advance the cursor by up to `n` bytes, returning the bytes passed over and
    /// whether the end of data was hit before `n` bytes could be taken.
    /// The returned slice is shorter than `n` exactly when the flag is set.
    pub fn next_bytes_clamped(&mut self, n: u64) -> (&'i [u8], bool) {
        let size = self.size();
        let (end, overflow) = safe_add(self.off, n);
        let (end, eof) = if overflow || end > size {
            (size, true)
        } else {
            (end, false)
        };

        if eof {
            #[cfg(feature = "defmt-extended")]
            defmt::trace!("end of data: off={} n={} size={}", self.off, n, size);
            #[cfg(feature = "tracing-extended")]
            tracing::trace!("end of data: off={} n={n} size={size}", self.off);
        }

        let data = &self.buf[self.off as usize..end as usize];
        self.off = end;
        (data, eof)
    }

    /// Take the next `n` bytes. On end of data the cursor is left at the end.
    pub fn next_bytes(&mut self, n: u64) -> Result<&'i [u8], Error> {
        match self.next_bytes_clamped(n) {
            (data, false) => Ok(data),
            (_, true) => Err(Error::EndOfData),
        }
    }

    fn next_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.next_bytes(N as u64)?);
        Ok(array)
    }

    /// Move the cursor forward by `n` bytes, with the same clamping as [ZeroCopySource::next_bytes].
    pub fn skip(&mut self, n: u64) -> Result<(), Error> {
        self.next_bytes(n).map(|_| ())
    }

    /// Back up a number of bytes, so that the next read returns data again
    /// that was already returned by a previous read.
    ///
    /// # Panics
    /// If `n` is larger than the current position.
    pub fn back_up(&mut self, n: u64) {
        assert!(
            n <= self.off,
            "back_up({n}) past the start of the source at {}",
            self.off
        );
        self.off -= n;
    }

    pub fn next_byte(&mut self) -> Result<u8, Error> {
        let Some(&b) = self.buf.get(self.off as usize) else {
            return Err(Error::EndOfData);
        };
        self.off += 1;
        Ok(b)
    }

    pub fn next_u8(&mut self) -> Result<u8, Error> {
        self.next_byte()
    }

    pub fn next_i8(&mut self) -> Result<i8, Error> {
        Ok(self.next_byte()? as i8)
    }

    /// Read bool from one byte, anything other than 0 or 1 is [Error::InvalidBool].
    pub fn next_bool(&mut self) -> Result<bool, Error> {
        match self.next_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }

    pub fn next_u16(&mut self) -> Result<u16, Error> {
        Ok(u16::from_le_bytes(self.next_array()?))
    }

    pub fn next_u32(&mut self) -> Result<u32, Error> {
        Ok(u32::from_le_bytes(self.next_array()?))
    }

    pub fn next_u64(&mut self) -> Result<u64, Error> {
        Ok(u64::from_le_bytes(self.next_array()?))
    }

    pub fn next_i16(&mut self) -> Result<i16, Error> {
        Ok(i16::from_le_bytes(self.next_array()?))
    }

    pub fn next_i32(&mut self) -> Result<i32, Error> {
        Ok(i32::from_le_bytes(self.next_array()?))
    }

    pub fn next_i64(&mut self) -> Result<i64, Error> {
        Ok(i64::from_le_bytes(self.next_array()?))
    }

    pub fn next_var_uint(&mut self) -> Result<u64, Error> {
        Ok(VarUint::read(self)?.0)
    }

    /// Read [VarUint] length and then that many bytes.
    pub fn next_var_bytes(&mut self) -> Result<&'i [u8], Error> {
        let len = self.next_var_uint()?;
        self.next_bytes(len)
    }

    /// Read var bytes and interpret them as UTF-8.
    pub fn next_string(&mut self) -> Result<&'i str, Error> {
        let bytes = self.next_var_bytes()?;
        core::str::from_utf8(bytes).map_err(|_| Error::MalformedUtf8)
    }

    pub fn next_address(&mut self) -> Result<Address, Error> {
        self.next_array::<ADDR_LEN>()
    }

    pub fn next_hash(&mut self) -> Result<Uint256, Error> {
        self.next_array::<UINT256_SIZE>()
    }

    /// Read any value that implements DeserializeZeroCopy.
    pub fn read<T: DeserializeZeroCopy<'i>>(&mut self) -> Result<T, Error> {
        T::des_zero_copy(self)
    }
}
