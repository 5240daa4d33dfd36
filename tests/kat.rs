//! Known-answer tests for the packed identifier decoders and the temporal
//! handlers.
//!
//! Each vector lists the raw input, its hex decomposition where relevant, and
//! the expected display string.

use netrec_fmt::format::bitfield::{EnbId, Gummei, decode_network_element};
use netrec_fmt::format::fields;
use netrec_fmt::{RawValue, format_value};

/// GUMMEI 0x310f2612340a
///
/// MCC: 310
/// MNC: f26 -> 26 (filler stripped)
/// MMEGI: 0x1234 = 4660
/// MMEC: 0x0a = 10 -> 010
#[test]
fn test_gummei_two_digit_mnc() {
    assert_eq!(
        format_value(fields::GUMMEI, &RawValue::from("53941132997642"), "", None),
        "310.26.4660.010"
    );
}

/// GUMMEI 0x262f01ffee2c
///
/// MCC: 262
/// MNC: f01 -> 01
/// MMEGI: 0xffee = 65518
/// MMEC: 0x2c = 44 -> 044
#[test]
fn test_gummei_leading_zero_mnc() {
    assert_eq!(
        format_value(fields::GUMMEI, &RawValue::from("41983338868268"), "", None),
        "262.01.65518.044"
    );
}

/// A 3-digit MNC carries no filler and is kept whole.
#[test]
fn test_gummei_three_digit_mnc() {
    // 0x310260123401: MCC 310, MNC 260, MMEGI 0x1234, MMEC 0x01
    let packed = 0x3102_6012_3401u64;
    let g = Gummei::from_packed(packed);
    assert_eq!(g.mcc, "310");
    assert_eq!(g.mnc, "260");
    assert_eq!(g.mme_group_id, Some(0x1234));
    assert_eq!(g.mme_code, Some(1));
    assert_eq!(
        format_value(fields::GUMMEI, &RawValue::from(packed), "", None),
        "310.260.4660.001"
    );
}

/// GUMMEI numbers above 2^53 must arrive as digit strings.
#[test]
fn test_gummei_full_width_text() {
    // MCC abcde, MNC f26, MMEGI 0x1234, MMEC 0xff
    let packed = 0x00ab_cdef_2612_34ffu64;
    assert!(packed > (1 << 53));
    assert_eq!(
        format_value(fields::GUMMEI, &RawValue::from(packed.to_string()), "", None),
        "abcde.26.4660.255"
    );
}

/// NE: PLMN 0x310f2 (200946), ECI 0x1234567 (19088743)
///
/// 200946 * 10^9 + 19088743 = 200946019088743
#[test]
fn test_network_element_reference() {
    let packed = (0x310f2u64 << 28) | 0x1234567;
    assert_eq!(packed, 53_941_050_230_119);
    assert_eq!(decode_network_element(packed), 200_946_019_088_743);
    assert_eq!(
        format_value(fields::NETWORK_ELEMENT, &RawValue::Number(packed as f64), "", None),
        "200946019088743"
    );
}

/// NE: every bit set. PLMN 0xfffff (1048575), ECI 0xfffffff (268435455).
#[test]
fn test_network_element_all_ones() {
    assert_eq!(
        format_value(fields::LTE_NE, &RawValue::from(u64::MAX.to_string()), "", None),
        "1048575268435455"
    );
}

/// NE: bits above PLMN are ignored.
#[test]
fn test_network_element_ignores_high_bits() {
    let packed = (0xABCu64 << 48) | (0x310f2u64 << 28) | 0x1234567;
    assert_eq!(decode_network_element(packed), 200_946_019_088_743);
}

/// eNodeB 0x123 (291), sector 0x45 (69)
#[test]
fn test_lte_enb_id_reference() {
    assert_eq!(
        format_value(fields::LTE_ENB_ID, &RawValue::Number(74565.0), "", None),
        "291.69"
    );
    assert_eq!(
        EnbId::from_packed(0x12345),
        EnbId {
            enodeb: 291,
            sector: 69
        }
    );
}

/// Bits above the low 28 do not change the eNodeB/sector pair.
#[test]
fn test_lte_enb_id_ignores_high_bits() {
    let packed = (5u64 << 32) | 0x12345;
    assert_eq!(packed, 21_474_911_045);
    assert_eq!(
        format_value(fields::LTE_START_ENB_ID, &RawValue::Number(packed as f64), "", None),
        "291.69"
    );
    assert_eq!(
        format_value(fields::LTE_END_ENB_ID, &RawValue::from("4026606405"), "", None),
        "291.69"
    );
}

/// 2021-03-04T15:06:07.890Z
#[test]
fn test_date_afternoon() {
    assert_eq!(
        format_value(
            fields::MILLISECOND_TIME_DATE,
            &RawValue::Number(1_614_870_367_890.0),
            "",
            None
        ),
        "03/04/21, 03:06:07 PM"
    );
}

/// 2020-01-01T12:00:00Z renders as noon, not midnight.
#[test]
fn test_date_noon() {
    assert_eq!(
        format_value(
            fields::MILLISECOND_TIME_DATE,
            &RawValue::Number(1_577_880_000_000.0),
            "",
            None
        ),
        "01/01/20, 12:00:00 PM"
    );
}

#[test]
fn test_date_epoch() {
    assert_eq!(
        format_value(fields::MILLISECOND_TIME_DATE, &RawValue::Number(0.0), "", None),
        "01/01/70, 12:00:00 AM"
    );
}

#[test]
fn test_duration_vectors() {
    let cases = [
        (0.0, "00:00"),
        (500.0, "00:00.500"),
        (65_000.0, "01:05"),
        (3_599_999.0, "59:59.999"),
        (3_600_000.0, "1:00:00"),
        (3_665_000.0, "1:01:05"),
        (90_061_001.0, "25:01:01.001"),
    ];
    for (ms, expected) in cases {
        assert_eq!(
            format_value(fields::MILLISECOND_DURATION, &RawValue::Number(ms), "", None),
            expected,
            "{} ms",
            ms
        );
    }
}
