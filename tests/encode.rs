use pretty_assertions::assert_eq;

use worldasm::{assemble, AsmError};

#[test]
fn register_values_round_trip() {
    for v in 0u16..=255 {
        let line = format!("L {v}, {v}");
        let img = assemble([line.as_str()]).unwrap();
        assert_eq!(img, vec![0x01, v as u8, v as u8]);
    }
}

#[test]
fn register_value_wraps_mod_256() {
    let img = assemble(["INT 300"]).unwrap();
    assert_eq!(img, vec![0x81, 44]);
}

#[test]
fn negative_register_wraps() {
    let img = assemble(["L -1, 0"]).unwrap();
    assert_eq!(img, vec![0x01, 0xFF, 0x00]);
}

#[test]
fn immediate_is_big_endian() {
    let img = assemble(["LI 0, $0102030405060708"]).unwrap();
    assert_eq!(
        img,
        vec![0xE1, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
    );
}

#[test]
fn immediate_wraps_mod_2_pow_64() {
    // 2^64 + 1 truncates to 1 rather than erroring.
    let wrapped = assemble(["LI 0, #18446744073709551617"]).unwrap();
    let one = assemble(["LI 0, #1"]).unwrap();
    assert_eq!(wrapped, one);
    assert_eq!(one[9], 0x01);
}

#[test]
fn hex_and_decimal_immediates_agree() {
    let hex = assemble(["LI 7, $FF"]).unwrap();
    let dec = assemble(["LI 7, #255"]).unwrap();
    assert_eq!(hex, dec);
    assert_eq!(hex, vec![0xE1, 0x07, 0, 0, 0, 0, 0, 0, 0, 0xFF]);
}

#[test]
fn immediate_without_marker_is_rejected() {
    let err = assemble(["LI 0, 10"]).unwrap_err();
    assert!(matches!(
        err,
        AsmError::InvalidImmediateSyntax { line_no: 1, .. }
    ));
}

#[test]
fn immediate_with_bad_body_is_rejected() {
    let err = assemble(["LI 0, #12x4"]).unwrap_err();
    assert!(matches!(err, AsmError::InvalidImmediateSyntax { .. }));

    let err = assemble(["LI 0, $"]).unwrap_err();
    assert!(matches!(err, AsmError::InvalidImmediateSyntax { .. }));
}

#[test]
fn non_integer_register_is_rejected() {
    let err = assemble(["L r1, 2"]).unwrap_err();
    match err {
        AsmError::MalformedOperand { line_no, token } => {
            assert_eq!(line_no, 1);
            assert_eq!(token, "r1");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
