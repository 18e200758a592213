use alloc::vec::Vec;

use crate::{Error, ZeroCopySink, ZeroCopySource};

pub trait SerializeZeroCopy {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink);

    /// Serialize into a fresh sink and return the written bytes.
    fn to_zc_bytes(&self) -> Vec<u8> {
        let mut sink = ZeroCopySink::new();
        self.ser_zero_copy(&mut sink);
        sink.into_bytes()
    }
}

pub trait DeserializeZeroCopy<'i>: Sized {
    fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error>;

    /// Deserialize from the front of `bytes`, trailing bytes are ignored.
    fn from_zc_bytes(bytes: &'i [u8]) -> Result<Self, Error> {
        let mut src = ZeroCopySource::new(bytes);
        Self::des_zero_copy(&mut src)
    }
}

macro_rules! impl_serialize {
    ($ty:ty, $write_fn:ident) => {
        impl SerializeZeroCopy for $ty {
            fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
                sink.$write_fn(*self)
            }
        }
    };
}
impl_serialize!(bool, write_bool);
impl_serialize!(u8, write_u8);
impl_serialize!(u16, write_u16);
impl_serialize!(u32, write_u32);
impl_serialize!(u64, write_u64);
impl_serialize!(i8, write_i8);
impl_serialize!(i16, write_i16);
impl_serialize!(i32, write_i32);
impl_serialize!(i64, write_i64);

macro_rules! impl_deserialize {
    ($ty:ty, $read_fn:ident) => {
        impl<'i> DeserializeZeroCopy<'i> for $ty {
            fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
                src.$read_fn()
            }
        }
    };
}
impl_deserialize!(bool, next_bool);
impl_deserialize!(u8, next_u8);
impl_deserialize!(u16, next_u16);
impl_deserialize!(u32, next_u32);
impl_deserialize!(u64, next_u64);
impl_deserialize!(i8, next_i8);
impl_deserialize!(i16, next_i16);
impl_deserialize!(i32, next_i32);
impl_deserialize!(i64, next_i64);

/// Fixed size arrays (addresses, hashes) are written as is, without a length prefix.
impl<const N: usize> SerializeZeroCopy for [u8; N] {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_bytes(self)
    }
}

impl<'i, const N: usize> DeserializeZeroCopy<'i> for [u8; N] {
    fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
        let mut array = [0u8; N];
        array.copy_from_slice(src.next_bytes(N as u64)?);
        Ok(array)
    }
}

impl SerializeZeroCopy for [u8] {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_var_bytes(self);
    }
}

impl SerializeZeroCopy for &[u8] {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_var_bytes(self);
    }
}

impl<'i> DeserializeZeroCopy<'i> for &'i [u8] {
    fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
        src.next_var_bytes()
    }
}

impl SerializeZeroCopy for str {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_string(self);
    }
}

impl SerializeZeroCopy for &str {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_string(self);
    }
}

impl<'i> DeserializeZeroCopy<'i> for &'i str {
    fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
        src.next_string()
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: SerializeZeroCopy),+> SerializeZeroCopy for ($($name,)+) {
            #[allow(non_snake_case)]
            fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
                let ($($name,)+) = self;
                $(sink.write($name);)+
            }
        }

        impl<'i, $($name: DeserializeZeroCopy<'i>),+> DeserializeZeroCopy<'i> for ($($name,)+) {
            fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
                Ok(($(src.read::<$name>()?,)+))
            }
        }
    };
}
impl_tuple!(T1, T2);
impl_tuple!(T1, T2, T3);
impl_tuple!(T1, T2, T3, T4);
