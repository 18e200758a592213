use alloc::vec::Vec;

use crate::common::{Address, Uint256};
use crate::var_uint::{VarUint, MAX_VAR_UINT_SIZE};
use crate::{Error, SerializeZeroCopy};

/// Capacity reserved by [ZeroCopySink::new].
pub const DEFAULT_CAPACITY: usize = 512;

/// Growable buffer writer. All numbers are written in Little Endian.
///
/// Space is handed out with [ZeroCopySink::next_bytes] directly inside the owned buffer, so values
/// are encoded in place without intermediate copies. When the buffer is full it is reallocated
/// to `2 * capacity + n` bytes.
///
/// # Example
/// ```
/// let mut sink = zero_copy::ZeroCopySink::new();
/// sink.write_bool(true);
/// sink.write_var_uint(300);
/// assert_eq!(sink.bytes(), &[0x01, 0xFD, 0x2C, 0x01]);
/// ```
#[derive(Clone, Debug)]
pub struct ZeroCopySink {
    buf: Vec<u8>,
}

impl ZeroCopySink {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Continue writing after the existing contents of `buf`, reusing its capacity.
    pub fn from_vec(buf: Vec<u8>) -> Self {
        Self { buf }
    }

    /// Fast path: extend the length if there is enough spare capacity.
    /// Returns the index where bytes should be written.
    #[inline]
    fn try_grow_in_place(&mut self, n: usize) -> Option<usize> {
        let len = self.buf.len();
        if n <= self.buf.capacity() - len {
            self.buf.resize(len + n, 0);
            Some(len)
        } else {
            None
        }
    }

    /// Guarantee space for `n` more bytes and extend the length by `n`.
    /// Returns the index where bytes should be written.
    fn grow(&mut self, n: usize) -> Result<usize, Error> {
        if let Some(idx) = self.try_grow_in_place(n) {
            return Ok(idx);
        }

        let len = self.buf.len();
        let capacity = self.buf.capacity();
        let new_capacity = capacity
            .checked_mul(2)
            .and_then(|c| c.checked_add(n))
            .filter(|&c| c <= isize::MAX as usize)
            .ok_or(Error::TooLarge)?;

        #[cfg(feature = "defmt-extended")]
        defmt::trace!("sink grow: {} -> {} bytes", capacity, new_capacity);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("sink grow: {capacity} -> {new_capacity} bytes");

        let mut buf = Vec::new();
        buf.try_reserve_exact(new_capacity)
            .map_err(|_| Error::TooLarge)?;
        buf.extend_from_slice(&self.buf);
        buf.resize(len + n, 0);
        self.buf = buf;
        Ok(len)
    }

    /// Reserve `n` bytes at the end of the buffer and return them for writing.
    ///
    /// # Panics
    /// If the grown buffer size would not fit into the address space.
    pub fn next_bytes(&mut self, n: usize) -> &mut [u8] {
        match self.grow(n) {
            Ok(idx) => &mut self.buf[idx..],
            Err(_) => too_large(n),
        }
    }

    /// Same as [ZeroCopySink::next_bytes], but reports [Error::TooLarge] instead of panicking.
    /// The sink is left untouched on error.
    pub fn try_next_bytes(&mut self, n: usize) -> Result<&mut [u8], Error> {
        let idx = self.grow(n)?;
        Ok(&mut self.buf[idx..])
    }

    /// Back up a number of bytes, so that the next call to next_bytes() returns space
    /// that was already handed out. Capacity and buffer contents are untouched.
    ///
    /// # Panics
    /// If `n` is larger than the number of bytes written.
    pub fn back_up(&mut self, n: usize) {
        let len = self.buf.len();
        assert!(n <= len, "back_up({n}) past the start of a {len} byte sink");
        self.buf.truncate(len - n);
    }

    /// Write the provided slice as is, without a length prefix.
    /// See [ZeroCopySink::write_var_bytes] for variable length slices.
    pub fn write_bytes(&mut self, val: &[u8]) {
        self.next_bytes(val.len()).copy_from_slice(val);
    }

    pub fn write_u8(&mut self, val: u8) {
        self.next_bytes(1)[0] = val;
    }

    pub fn write_byte(&mut self, val: u8) {
        self.write_u8(val)
    }

    pub fn write_i8(&mut self, val: i8) {
        self.write_u8(val as u8)
    }

    /// Write bool as one byte: 0 or 1.
    pub fn write_bool(&mut self, val: bool) {
        self.write_u8(val as u8)
    }

    pub fn write_u16(&mut self, val: u16) {
        self.write_bytes(&val.to_le_bytes());
    }

    pub fn write_u32(&mut self, val: u32) {
        self.write_bytes(&val.to_le_bytes());
    }

    pub fn write_u64(&mut self, val: u64) {
        self.write_bytes(&val.to_le_bytes());
    }

    pub fn write_i16(&mut self, val: i16) {
        self.write_bytes(&val.to_le_bytes());
    }

    pub fn write_i32(&mut self, val: i32) {
        self.write_bytes(&val.to_le_bytes());
    }

    pub fn write_i64(&mut self, val: i64) {
        self.write_bytes(&val.to_le_bytes());
    }

    /// Write a variable length integer, returns the number of bytes used (1, 3, 5 or 9).
    ///
    /// Space for the widest encoding is reserved first, then the unused tail is backed up.
    pub fn write_var_uint(&mut self, val: u64) -> u64 {
        let window = self.next_bytes(MAX_VAR_UINT_SIZE);
        let size = VarUint(val).encode_into(window);
        self.back_up(MAX_VAR_UINT_SIZE - size);

        #[cfg(feature = "defmt-extended")]
        defmt::trace!("write VarUint {} in {} bytes", val, size);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("write VarUint {val} in {size} bytes");

        size as u64
    }

    /// Write slice prefixed with its length as [VarUint]. Returns the total number of bytes written.
    pub fn write_var_bytes(&mut self, val: &[u8]) -> u64 {
        let len = val.len() as u64;
        let size = self.write_var_uint(len) + len;
        self.write_bytes(val);
        size
    }

    /// Write UTF-8 bytes of a string as var bytes. Returns the total number of bytes written.
    pub fn write_string(&mut self, val: &str) -> u64 {
        self.write_var_bytes(val.as_bytes())
    }

    pub fn write_address(&mut self, addr: &Address) {
        self.write_bytes(addr);
    }

    pub fn write_hash(&mut self, hash: &Uint256) {
        self.write_bytes(hash);
    }

    /// Write any object that implements SerializeZeroCopy trait.
    pub fn write<T: SerializeZeroCopy + ?Sized>(&mut self, val: &T) {
        val.ser_zero_copy(self)
    }

    /// Number of bytes written.
    pub fn size(&self) -> u64 {
        self.buf.len() as u64
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Forget everything written, keeping the allocated capacity.
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

impl Default for ZeroCopySink {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for ZeroCopySink {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

#[cold]
#[inline(never)]
fn too_large(n: usize) -> ! {
    panic!("zero_copy sink: growing by {n} bytes exceeds the address space")
}
