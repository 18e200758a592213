#![no_main]

use libfuzzer_sys::fuzz_target;
use zero_copy::{ZeroCopySink, ZeroCopySource};

// First byte of every step selects the read, the rest of the input is data.
fuzz_target!(|data: &[u8]| {
    let mut src = ZeroCopySource::new(data);
    let mut sink = ZeroCopySink::with_capacity(16);
    loop {
        let Ok(op) = src.next_u8() else {
            break;
        };
        let start = src.pos();
        let ok = match op % 8 {
            0 => src.next_u16().map(|v| sink.write_u16(v)).is_ok(),
            1 => src.next_u32().map(|v| sink.write_u32(v)).is_ok(),
            2 => src.next_u64().map(|v| sink.write_u64(v)).is_ok(),
            3 => src.next_bool().map(|v| sink.write_bool(v)).is_ok(),
            4 => match src.next_var_uint() {
                Ok(v) => {
                    let size = sink.write_var_uint(v);
                    assert!(size <= src.pos() - start);
                    true
                }
                Err(_) => false,
            },
            5 => src.next_var_bytes().map(|v| sink.write_var_bytes(v)).is_ok(),
            6 => src.next_address().map(|v| sink.write_address(&v)).is_ok(),
            _ => src.next_hash().map(|v| sink.write_hash(&v)).is_ok(),
        };
        assert!(src.pos() <= src.size());
        if !ok {
            break;
        }
    }
    assert!(sink.capacity() >= sink.len());
});
