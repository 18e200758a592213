use zero_copy::prelude::*;

const VAR_UINT_BOUNDARIES: [u64; 8] = [
    0,
    0xFC,
    0xFD,
    0xFFFF,
    0x1_0000,
    0xFFFF_FFFF,
    0x1_0000_0000,
    u64::MAX,
];

#[test]
fn var_uint() {
    let mut sink = ZeroCopySink::new();
    for val in VAR_UINT_BOUNDARIES {
        sink.write_var_uint(val);
    }
    let mut src = ZeroCopySource::new(sink.bytes());
    for val in VAR_UINT_BOUNDARIES {
        assert_eq!(src.next_var_uint(), Ok(val));
    }
    assert!(src.is_empty());
}

#[test]
fn fixed_width_boundaries() {
    let mut sink = ZeroCopySink::new();
    for val in VAR_UINT_BOUNDARIES {
        sink.write_u8(val as u8);
        sink.write_u16(val as u16);
        sink.write_u32(val as u32);
        sink.write_u64(val);
        sink.write_i8(val as i8);
        sink.write_i16(val as i16);
        sink.write_i32(val as i32);
        sink.write_i64(val as i64);
    }
    let mut src = ZeroCopySource::new(sink.bytes());
    for val in VAR_UINT_BOUNDARIES {
        assert_eq!(src.next_u8(), Ok(val as u8));
        assert_eq!(src.next_u16(), Ok(val as u16));
        assert_eq!(src.next_u32(), Ok(val as u32));
        assert_eq!(src.next_u64(), Ok(val));
        assert_eq!(src.next_i8(), Ok(val as i8));
        assert_eq!(src.next_i16(), Ok(val as i16));
        assert_eq!(src.next_i32(), Ok(val as i32));
        assert_eq!(src.next_i64(), Ok(val as i64));
    }
    assert!(src.is_empty());
}

#[test]
fn signed_extremes() {
    let values = (i8::MIN, i16::MIN, i32::MIN, i64::MIN);
    let bytes = values.to_zc_bytes();
    assert_eq!(bytes.len(), 1 + 2 + 4 + 8);
    let x: (i8, i16, i32, i64) = DeserializeZeroCopy::from_zc_bytes(&bytes).unwrap();
    assert_eq!(x, values);
}

#[test]
fn var_bytes_across_growth() {
    let payloads: Vec<Vec<u8>> = [0usize, 1, 0xFC, 0xFD, 1000, 70_000]
        .iter()
        .map(|&len| (0..len).map(|i| i as u8).collect())
        .collect();

    let mut sink = ZeroCopySink::with_capacity(1);
    for payload in &payloads {
        sink.write_var_bytes(payload);
    }

    let mut src = ZeroCopySource::new(sink.bytes());
    for payload in &payloads {
        assert_eq!(src.next_var_bytes(), Ok(payload.as_slice()));
    }
    assert!(src.is_empty());
}

#[test]
fn source_backup_symmetry() {
    let mut sink = ZeroCopySink::new();
    sink.write_u16(0xBEEF);
    sink.write_string("abc");
    sink.write_u32(42);
    let bytes = sink.into_bytes();

    let mut src = ZeroCopySource::new(&bytes);
    assert_eq!(src.next_u16(), Ok(0xBEEF));
    let pos = src.pos();
    assert_eq!(src.skip(4), Ok(()));
    src.back_up(4);
    assert_eq!(src.pos(), pos);
    assert_eq!(src.next_string(), Ok("abc"));
    assert_eq!(src.next_u32(), Ok(42));
}

#[test]
fn sink_backup_symmetry() {
    let mut sink = ZeroCopySink::new();
    sink.write_u8(0x11);
    sink.next_bytes(8).fill(0xEE);
    sink.back_up(8);
    assert_eq!(sink.len(), 1);
    sink.write_u64(0x0807_0605_0403_0201);
    assert_eq!(sink.bytes(), &[0x11, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn owned_values() {
    let original = (String::from("ledger"), vec![9u8, 8, 7], VarUint(0x1_0000));
    let bytes = original.to_zc_bytes();
    let decoded: (String, Vec<u8>, VarUint) = DeserializeZeroCopy::from_zc_bytes(&bytes).unwrap();
    assert_eq!(decoded, original);
}
