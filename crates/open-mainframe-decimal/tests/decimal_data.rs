//! Boundary-value tests for the decimal data codecs.
//!
//! Exercises every form and decimal type against the extremes of the
//! native types, the overflow policies and the validation order.

use std::str::FromStr;

use num_bigint::BigInt;
use open_mainframe_decimal::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const CHECKED: OverflowMode = OverflowMode::Checked;
const WRAPPING: OverflowMode = OverflowMode::Wrapping;

const EXTERNAL_TYPES: [DecimalType; 4] = [
    DecimalType::EbcdicSignEmbeddedTrailing,
    DecimalType::EbcdicSignEmbeddedLeading,
    DecimalType::EbcdicSignSeparateTrailing,
    DecimalType::EbcdicSignSeparateLeading,
];

const UNICODE_SIGNED_TYPES: [DecimalType; 2] = [
    DecimalType::UnicodeSignSeparateLeading,
    DecimalType::UnicodeSignSeparateTrailing,
];

const I64_VALUES: [i64; 13] = [
    0,
    1,
    -1,
    9,
    -10,
    12345,
    -12345,
    i32::MAX as i64,
    i32::MIN as i64,
    i64::MAX,
    i64::MIN,
    i64::MAX - 1,
    i64::MIN + 1,
];

const I32_VALUES: [i32; 8] = [0, 7, -7, 100, -99999, i32::MAX, i32::MIN, i32::MIN + 1];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn digit_count(value: i64) -> usize {
    value.unsigned_abs().to_string().len()
}

fn big(s: &str) -> BigInt {
    BigInt::from_str(s).unwrap()
}

// ─── Round-trip identity ───

#[test]
fn test_i64_roundtrip_packed() {
    for value in I64_VALUES {
        for precision in [digit_count(value), digit_count(value) + 1, 19] {
            for offset in [0, 3] {
                let mut buf = vec![0u8; offset + packed_len(precision)];
                pack_i64(value, &mut buf, offset, precision, CHECKED).unwrap();
                assert_eq!(
                    unpack_i64(&buf, offset, precision, CHECKED).unwrap(),
                    value,
                    "value {value} precision {precision} offset {offset}"
                );
            }
        }
    }
}

#[test]
fn test_i64_roundtrip_external() {
    for t in EXTERNAL_TYPES {
        for value in I64_VALUES {
            for precision in [digit_count(value), 20] {
                let mut buf = vec![0u8; 2 + t.required_len(precision)];
                zone_i64(value, &mut buf, 2, precision, CHECKED, t).unwrap();
                assert_eq!(
                    unzone_i64(&buf, 2, precision, CHECKED, t).unwrap(),
                    value,
                    "{t:?} value {value} precision {precision}"
                );
            }
        }
    }
}

#[test]
fn test_i64_roundtrip_unicode() {
    for t in UNICODE_SIGNED_TYPES {
        for value in I64_VALUES {
            let precision = digit_count(value);
            let mut buf = vec![0u16; 1 + t.required_len(precision)];
            encode_unicode_i64(value, &mut buf, 1, precision, CHECKED, t).unwrap();
            assert_eq!(
                decode_unicode_i64(&buf, 1, precision, CHECKED, t).unwrap(),
                value,
                "{t:?} value {value}"
            );
        }
    }
    for value in I64_VALUES.into_iter().filter(|v| *v >= 0) {
        let mut buf = vec![0u16; 19];
        encode_unicode_i64(value, &mut buf, 0, 19, CHECKED, DecimalType::UnicodeUnsigned).unwrap();
        assert_eq!(
            decode_unicode_i64(&buf, 0, 19, CHECKED, DecimalType::UnicodeUnsigned).unwrap(),
            value
        );
    }
}

#[test]
fn test_i32_roundtrip_all_forms() {
    for value in I32_VALUES {
        let precision = 10;

        let mut packed = [0u8; 6];
        pack_i32(value, &mut packed, 0, precision, CHECKED).unwrap();
        assert_eq!(unpack_i32(&packed, 0, precision, CHECKED).unwrap(), value);

        for t in EXTERNAL_TYPES {
            let mut zoned = [0u8; 11];
            zone_i32(value, &mut zoned, 0, precision, CHECKED, t).unwrap();
            assert_eq!(unzone_i32(&zoned, 0, precision, CHECKED, t).unwrap(), value);
        }

        for t in UNICODE_SIGNED_TYPES {
            let mut text = [0u16; 11];
            encode_unicode_i32(value, &mut text, 0, precision, CHECKED, t).unwrap();
            assert_eq!(decode_unicode_i32(&text, 0, precision, CHECKED, t).unwrap(), value);
        }
    }
}

#[test]
fn test_big_int_roundtrip_all_forms() {
    let values = [
        big("0"),
        big("-1"),
        big("123456789012345678901234567890123456789"),
        big("-99999999999999999999999999999999999999999"),
    ];
    let precision = 45;
    for value in &values {
        let mut packed = [0u8; 23];
        pack_big_int(value, &mut packed, 0, precision, CHECKED).unwrap();
        assert_eq!(&unpack_big_int(&packed, 0, precision, CHECKED).unwrap(), value);

        for t in EXTERNAL_TYPES {
            let mut zoned = [0u8; 46];
            zone_big_int(value, &mut zoned, 0, precision, CHECKED, t).unwrap();
            assert_eq!(&unzone_big_int(&zoned, 0, precision, CHECKED, t).unwrap(), value);
        }

        for t in UNICODE_SIGNED_TYPES {
            let mut text = [0u16; 46];
            encode_unicode_big_int(value, &mut text, 0, precision, CHECKED, t).unwrap();
            assert_eq!(
                &decode_unicode_big_int(&text, 0, precision, CHECKED, t).unwrap(),
                value
            );
        }
    }
}

// ─── Truncation law ───

#[test]
fn test_truncation_keeps_low_order_digits() {
    init_tracing();

    let mut packed = [0u8; 3];
    pack_i64(12345, &mut packed, 0, 4, WRAPPING).unwrap();
    assert_eq!(unpack_i64(&packed, 0, 4, WRAPPING).unwrap(), 2345);

    for t in EXTERNAL_TYPES {
        let mut zoned = [0u8; 4];
        zone_i32(-12345, &mut zoned, 0, 3, WRAPPING, t).unwrap();
        assert_eq!(unzone_i32(&zoned, 0, 3, WRAPPING, t).unwrap(), -345, "{t:?}");
    }

    for t in UNICODE_SIGNED_TYPES {
        let mut text = [0u16; 4];
        encode_unicode_i64(i64::MIN, &mut text, 0, 3, WRAPPING, t).unwrap();
        assert_eq!(decode_unicode_i64(&text, 0, 3, WRAPPING, t).unwrap(), -808);
    }

    let mut packed = [0u8; 3];
    pack_big_int(&big("-123456789"), &mut packed, 0, 5, WRAPPING).unwrap();
    assert_eq!(
        unpack_big_int(&packed, 0, 5, WRAPPING).unwrap(),
        big("-56789")
    );
}

// ─── Overflow raises ───

#[test]
fn test_checked_encode_overflow_all_forms() {
    let expected = Err(DecimalError::PrecisionOverflow {
        digits: 5,
        precision: 4,
    });

    let mut packed = [0u8; 3];
    assert_eq!(pack_i32(12345, &mut packed, 0, 4, CHECKED), expected);
    assert_eq!(pack_i64(-12345, &mut packed, 0, 4, CHECKED), expected);
    assert_eq!(pack_big_int(&big("12345"), &mut packed, 0, 4, CHECKED), expected);
    assert_eq!(
        pack_decimal(&BigDecimal::from_str("1.2345").unwrap(), &mut packed, 0, 4, CHECKED),
        expected
    );

    for t in EXTERNAL_TYPES {
        let mut zoned = [0u8; 5];
        assert_eq!(zone_i32(-12345, &mut zoned, 0, 4, CHECKED, t), expected);
    }
    for t in UNICODE_SIGNED_TYPES {
        let mut text = [0u16; 5];
        assert_eq!(encode_unicode_i64(12345, &mut text, 0, 4, CHECKED, t), expected);
    }
}

// ─── Wrap law ───

#[test]
fn test_wrap_law_i64_all_forms() {
    init_tracing();
    let beyond = big("9223372036854775808");
    let precision = 19;

    let mut packed = [0u8; 10];
    pack_big_int(&beyond, &mut packed, 0, precision, CHECKED).unwrap();
    assert_eq!(unpack_i64(&packed, 0, precision, WRAPPING).unwrap(), i64::MIN);
    assert!(unpack_i64(&packed, 0, precision, CHECKED)
        .unwrap_err()
        .is_overflow());

    for t in EXTERNAL_TYPES {
        let mut zoned = [0u8; 20];
        zone_big_int(&beyond, &mut zoned, 0, precision, CHECKED, t).unwrap();
        assert_eq!(unzone_i64(&zoned, 0, precision, WRAPPING, t).unwrap(), i64::MIN);
        assert_eq!(
            unzone_i64(&zoned, 0, precision, CHECKED, t),
            Err(DecimalError::RangeOverflow { target: "i64" })
        );
    }

    for t in [
        DecimalType::UnicodeUnsigned,
        DecimalType::UnicodeSignSeparateLeading,
        DecimalType::UnicodeSignSeparateTrailing,
    ] {
        let mut text = [0u16; 20];
        encode_unicode_big_int(&beyond, &mut text, 0, precision, CHECKED, t).unwrap();
        assert_eq!(
            decode_unicode_i64(&text, 0, precision, WRAPPING, t).unwrap(),
            i64::MIN
        );
    }
}

#[test]
fn test_wrap_law_i32_all_forms() {
    let below = i64::from(i32::MIN) - 1;
    let precision = 10;

    let mut packed = [0u8; 6];
    pack_i64(below, &mut packed, 0, precision, CHECKED).unwrap();
    assert_eq!(unpack_i32(&packed, 0, precision, WRAPPING).unwrap(), i32::MAX);
    assert_eq!(
        unpack_i32(&packed, 0, precision, CHECKED),
        Err(DecimalError::RangeOverflow { target: "i32" })
    );

    for t in EXTERNAL_TYPES {
        let mut zoned = [0u8; 11];
        zone_i64(below, &mut zoned, 0, precision, CHECKED, t).unwrap();
        assert_eq!(unzone_i32(&zoned, 0, precision, WRAPPING, t).unwrap(), i32::MAX);
    }

    for t in UNICODE_SIGNED_TYPES {
        let mut text = [0u16; 11];
        encode_unicode_i64(below, &mut text, 0, precision, CHECKED, t).unwrap();
        assert_eq!(
            decode_unicode_i32(&text, 0, precision, WRAPPING, t).unwrap(),
            i32::MAX
        );
    }
}

// ─── Bounds ───

#[test]
fn test_bounds_raise_in_every_mode() {
    for mode in [CHECKED, WRAPPING] {
        let mut packed = [0u8; 3];
        assert!(matches!(
            pack_i64(1, &mut packed, 1, 5, mode),
            Err(DecimalError::OutOfBounds { .. })
        ));
        assert!(matches!(
            unpack_decimal(&packed, 0, 6, 2, mode),
            Err(DecimalError::OutOfBounds { .. })
        ));

        for t in EXTERNAL_TYPES {
            let mut zoned = vec![0u8; t.required_len(5) - 1];
            assert!(matches!(
                zone_i32(1, &mut zoned, 0, 5, mode, t),
                Err(DecimalError::OutOfBounds { .. })
            ));
            assert!(matches!(
                unzone_big_int(&zoned, 0, 5, mode, t),
                Err(DecimalError::OutOfBounds { .. })
            ));
        }

        for t in DecimalType::ALL
            .into_iter()
            .filter(|t| t.form() == Form::Unicode)
        {
            let mut text = vec![0u16; t.required_len(5)];
            assert!(matches!(
                encode_unicode_i32(1, &mut text, 1, 5, mode, t),
                Err(DecimalError::OutOfBounds { .. })
            ));
            assert!(matches!(
                decode_unicode_i64(&text, 1, 5, mode, t),
                Err(DecimalError::OutOfBounds { .. })
            ));
        }
    }
}

#[test]
fn test_bounds_reported_before_invalid_type() {
    let mut zoned = [0u8; 2];
    assert!(matches!(
        zone_i64(5, &mut zoned, 0, 4, CHECKED, 0),
        Err(DecimalError::OutOfBounds { .. })
    ));
    let text = [0u16; 2];
    assert!(matches!(
        decode_unicode_i32(&text, 0, 4, CHECKED, 12),
        Err(DecimalError::OutOfBounds { .. })
    ));
}

#[test]
fn test_zero_precision_rejected_everywhere() {
    let mut bytes = [0u8; 4];
    let mut text = [0u16; 4];
    let err = Err(DecimalError::InvalidPrecision { precision: 0 });
    assert_eq!(pack_i32(0, &mut bytes, 0, 0, WRAPPING), err);
    assert_eq!(
        zone_i32(0, &mut bytes, 0, 0, WRAPPING, DecimalType::EbcdicSignEmbeddedTrailing),
        err
    );
    assert_eq!(
        encode_unicode_i32(0, &mut text, 0, 0, WRAPPING, DecimalType::UnicodeUnsigned),
        err
    );
}

// ─── Decimal scale fidelity ───

#[test]
fn test_decimal_scale_fidelity() {
    let values = [
        "0.00",
        "-1.5",
        "123.4500",
        "-0.000000001",
        "79228162514264.337593543950335",
        // 31 digits, wider than a 96-bit mantissa.
        "1234567890123456789012345678901",
        "-12345678901234567890123.45678901",
        // Scale 33.
        "0.000000000000000000000000000000001",
        // Negative scales.
        "5E+3",
        "-9.99E40",
    ];
    let precision = 31;
    for s in values {
        let value = BigDecimal::from_str(s).unwrap();
        let scale = value.scale();

        let mut packed = [0u8; 16];
        pack_decimal(&value, &mut packed, 0, precision, CHECKED).unwrap();
        let back = unpack_decimal(&packed, 0, precision, scale, CHECKED).unwrap();
        assert_eq!(back, value, "{s}");

        for t in EXTERNAL_TYPES {
            let mut zoned = [0u8; 32];
            zone_decimal(&value, &mut zoned, 0, precision, CHECKED, t).unwrap();
            let back = unzone_decimal(&zoned, 0, precision, scale, CHECKED, t).unwrap();
            assert_eq!(back, value, "{s} {t:?}");
        }

        for t in UNICODE_SIGNED_TYPES {
            let mut text = [0u16; 32];
            encode_unicode_decimal(&value, &mut text, 0, precision, CHECKED, t).unwrap();
            let back = decode_unicode_decimal(&text, 0, precision, scale, CHECKED, t).unwrap();
            assert_eq!(back, value, "{s} {t:?}");
        }
    }
}

#[test]
fn test_decimal_decode_scale_is_caller_supplied() {
    let value = BigDecimal::from_str("1.2345").unwrap();
    let mut packed = [0u8; 3];
    pack_decimal(&value, &mut packed, 0, 5, CHECKED).unwrap();
    assert_eq!(
        unpack_decimal(&packed, 0, 5, 0, CHECKED).unwrap(),
        BigDecimal::from(12345i64)
    );
    assert_eq!(
        unpack_decimal(&packed, 0, 5, 29, WRAPPING).unwrap().to_string(),
        "0.00000000000000000000000012345"
    );
    assert_eq!(
        unpack_decimal(&packed, 0, 5, -2, WRAPPING).unwrap().to_string(),
        "1234500"
    );
}

#[test]
fn test_decimal_truncation_keeps_scale() {
    let value = BigDecimal::from_str("-98765.4321").unwrap();
    let mut text = [0u16; 6];
    let t = DecimalType::UnicodeSignSeparateLeading;
    encode_unicode_decimal(&value, &mut text, 0, 5, WRAPPING, t).unwrap();
    let back = decode_unicode_decimal(&text, 0, 5, value.scale(), WRAPPING, t).unwrap();
    assert_eq!(back.to_string(), "-5.4321");
}

#[test]
fn test_rust_decimal_interop() {
    let value = Decimal::from_str("-0.0042").unwrap();
    let mut zoned = [0u8; 6];
    let t = DecimalType::EbcdicSignEmbeddedLeading;
    zone_decimal(&BigDecimal::from(value), &mut zoned, 0, 6, CHECKED, t).unwrap();
    let back = unzone_decimal(&zoned, 0, 6, 4, CHECKED, t).unwrap();
    assert_eq!(Decimal::try_from(&back).unwrap(), value);

    let wide = unzone_decimal(&zoned, 0, 6, 30, CHECKED, t).unwrap();
    assert_eq!(
        Decimal::try_from(&wide),
        Err(DecimalError::ScaleOutOfRange { scale: 30 })
    );
}

// ─── Concrete scenarios ───

#[test]
fn test_zero_uses_positive_sign_code() {
    let mut zoned = [0u8; 11];
    zone_i32(0, &mut zoned, 0, 10, CHECKED, DecimalType::EbcdicSignSeparateLeading).unwrap();
    assert_eq!(zoned[0], 0x4E);

    let mut packed = [0u8; 2];
    pack_big_int(&big("-0"), &mut packed, 0, 2, CHECKED).unwrap();
    assert_eq!(packed, [0x00, 0x0C]);

    let mut text = [0u16; 3];
    encode_unicode_decimal(
        &BigDecimal::from_str("-0.0").unwrap(),
        &mut text,
        0,
        2,
        CHECKED,
        DecimalType::UnicodeSignSeparateTrailing,
    )
    .unwrap();
    assert_eq!(text, [0x30, 0x30, 0x2B]);
}

#[test]
fn test_legacy_error_checking_flag() {
    let mut packed = [0u8; 3];
    assert!(pack_i32(12345, &mut packed, 0, 4, true.into()).is_err());
    pack_i32(12345, &mut packed, 0, 4, false.into()).unwrap();
    assert_eq!(unpack_i32(&packed, 0, 4, false.into()).unwrap(), 2345);
}

#[test]
fn test_unsigned_unicode_rejects_negative() {
    let mut text = [0u16; 5];
    for value in [-1i64, i64::MIN] {
        assert_eq!(
            encode_unicode_i64(value, &mut text, 0, 5, WRAPPING, DecimalType::UnicodeUnsigned),
            Err(DecimalError::NegativeUnsigned)
        );
    }
}

#[test]
fn test_cross_form_matches_native_path() {
    let value = -9_876_543_210i64;
    let precision = 12;

    let mut packed = [0u8; 7];
    pack_i64(value, &mut packed, 0, precision, CHECKED).unwrap();

    for t in EXTERNAL_TYPES {
        let mut via_convert = [0u8; 13];
        packed_to_zoned(&packed, 0, &mut via_convert, 0, precision, t).unwrap();
        let mut via_native = [0u8; 13];
        zone_i64(value, &mut via_native, 0, precision, CHECKED, t).unwrap();
        assert_eq!(via_convert, via_native, "{t:?}");
    }

    for t in UNICODE_SIGNED_TYPES {
        let mut text = [0u16; 13];
        packed_to_unicode(&packed, 0, &mut text, 0, precision, t).unwrap();
        assert_eq!(decode_unicode_i64(&text, 0, precision, CHECKED, t).unwrap(), value);
    }
}
