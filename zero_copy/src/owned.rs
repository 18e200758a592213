use alloc::string::String;
use alloc::vec::Vec;

use crate::{DeserializeZeroCopy, Error, SerializeZeroCopy, ZeroCopySink, ZeroCopySource};

impl SerializeZeroCopy for Vec<u8> {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_var_bytes(self);
    }
}

impl<'i> DeserializeZeroCopy<'i> for Vec<u8> {
    fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
        Ok(src.next_var_bytes()?.to_vec())
    }
}

impl SerializeZeroCopy for String {
    fn ser_zero_copy(&self, sink: &mut ZeroCopySink) {
        sink.write_string(self);
    }
}

impl<'i> DeserializeZeroCopy<'i> for String {
    fn des_zero_copy(src: &mut ZeroCopySource<'i>) -> Result<Self, Error> {
        Ok(String::from(src.next_string()?))
    }
}
