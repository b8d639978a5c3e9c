// Fixed-width codec suite. Catches:
//
// * byte order regressions (BE vs LE layouts)
// * sign extension mistakes
// * triad truncation drift
// * width checks that pad or truncate instead of failing

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use binary_core::{
        codec::*,
        constants::{TRIAD_MAX, LONG_LEN},
        BinaryError,
    };

// ## 1️⃣ Endianness symmetry

    #[test]
    fn short_layouts() {
        assert_eq!(write_short(0x1234), [0x12, 0x34]);
        assert_eq!(write_lshort(0x1234), [0x34, 0x12]);
        assert_eq!(read_short(&[0x12, 0x34]).unwrap(), 0x1234);
        assert_eq!(read_lshort(&[0x34, 0x12]).unwrap(), 0x1234);
    }

    #[test]
    fn int_layouts() {
        assert_eq!(write_int(0x0102_0304), [1, 2, 3, 4]);
        assert_eq!(write_lint(0x0102_0304), [4, 3, 2, 1]);
        assert_eq!(read_int(&[1, 2, 3, 4]).unwrap(), 0x0102_0304);
        assert_eq!(read_lint(&[4, 3, 2, 1]).unwrap(), 0x0102_0304);
    }

    #[test]
    fn long_layouts() {
        let v = 0x0102_0304_0506_0708i64;
        assert_eq!(write_long(v), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(write_llong(v), [8, 7, 6, 5, 4, 3, 2, 1]);
    }

// ## 2️⃣ Triad range

    #[test]
    fn triad_bounds_round_trip() {
        for v in [0, 1, 0x7F_FFFF, TRIAD_MAX] {
            assert_eq!(read_triad(&write_triad(v)).unwrap(), v);
            assert_eq!(read_ltriad(&write_ltriad(v)).unwrap(), v);
        }
    }

    #[test]
    fn triad_wraps_past_max() {
        assert_eq!(write_triad(TRIAD_MAX + 1), [0, 0, 0]);
        assert_eq!(write_ltriad(TRIAD_MAX + 1), [0, 0, 0]);
        assert_eq!(read_triad(&write_triad(TRIAD_MAX + 1)).unwrap(), 0);
        assert_eq!(read_triad(&write_triad(TRIAD_MAX + 5)).unwrap(), 4);
    }

// ## 3️⃣ 64-bit cross-width consistency

    #[test]
    fn minus_one_long() {
        assert_eq!(write_long(-1), [0xFF; LONG_LEN]);
        assert_eq!(read_long(&[0xFF; LONG_LEN]).unwrap(), -1);
        assert_eq!(read_llong(&[0xFF; LONG_LEN]).unwrap(), -1);
    }

    #[test]
    fn long_extremes() {
        for v in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            assert_eq!(read_long(&write_long(v)).unwrap(), v);
            assert_eq!(read_llong(&write_llong(v)).unwrap(), v);
        }
    }

// ## 4️⃣ Bit reinterpretation (no range checks on decode)

    #[test]
    fn unsigned_read_of_negative_short() {
        let raw = write_short(-1i16 as u16);
        assert_eq!(read_short(&raw).unwrap(), 0xFFFF);
        assert_eq!(read_signed_short(&raw).unwrap(), -1);
    }

    #[test]
    fn byte_signedness() {
        let raw = write_byte(0x80);
        assert_eq!(read_byte(&raw).unwrap(), 128);
        assert_eq!(read_signed_byte(&raw).unwrap(), -128);
    }

    #[test]
    fn bool_decoding() {
        assert!(!read_bool(&write_bool(false)).unwrap());
        assert!(read_bool(&write_bool(true)).unwrap());
        assert!(read_bool(&[0x02]).unwrap());
    }

// ## 5️⃣ Width preconditions

    #[test]
    fn decoders_reject_wrong_lengths() {
        assert_eq!(read_byte(&[1, 2]), Err(BinaryError::InvalidInput { expected: 1, actual: 2 }));
        assert_eq!(read_lshort(&[]), Err(BinaryError::InvalidInput { expected: 2, actual: 0 }));
        assert_eq!(read_ltriad(&[0; 4]), Err(BinaryError::InvalidInput { expected: 3, actual: 4 }));
        assert_eq!(read_lint(&[0; 3]), Err(BinaryError::InvalidInput { expected: 4, actual: 3 }));
        assert_eq!(read_llong(&[0; 9]), Err(BinaryError::InvalidInput { expected: 8, actual: 9 }));
        assert!(read_signed_lshort(&[0; 3]).is_err());
    }

// ## 6️⃣ Property-based round trips

    proptest! {
        #[test]
        fn prop_short_round_trip(v in any::<u16>()) {
            prop_assert_eq!(read_short(&write_short(v)).unwrap(), v);
            prop_assert_eq!(read_lshort(&write_lshort(v)).unwrap(), v);
            prop_assert_eq!(read_signed_short(&write_short(v)).unwrap(), v as i16);
            prop_assert_eq!(read_signed_lshort(&write_lshort(v)).unwrap(), v as i16);
        }

        #[test]
        fn prop_triad_truncates(v in any::<u32>()) {
            prop_assert_eq!(read_triad(&write_triad(v)).unwrap(), v & TRIAD_MAX);
            prop_assert_eq!(read_ltriad(&write_ltriad(v)).unwrap(), v & TRIAD_MAX);
        }

        #[test]
        fn prop_int_round_trip(v in any::<i32>()) {
            prop_assert_eq!(read_int(&write_int(v)).unwrap(), v);
            prop_assert_eq!(read_lint(&write_lint(v)).unwrap(), v);
        }

        #[test]
        fn prop_long_round_trip(v in any::<i64>()) {
            prop_assert_eq!(read_long(&write_long(v)).unwrap(), v);
            prop_assert_eq!(read_llong(&write_llong(v)).unwrap(), v);
        }

        #[test]
        fn prop_le_is_reversed_be(v in any::<i64>()) {
            let mut be = write_long(v);
            be.reverse();
            prop_assert_eq!(be, write_llong(v));
        }
    }
}
