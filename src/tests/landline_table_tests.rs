use crate::{errors::LandlineTableError, LandlineInfo, LandlineTable};

use super::{init_logger, test_landline_table::TEST_LANDLINE_TABLE};

fn info(managing_area: &str, carrier: Option<&str>, status: Option<&str>) -> LandlineInfo {
    LandlineInfo {
        managing_area: Some(managing_area.to_owned()),
        carrier: carrier.map(str::to_owned),
        status: status.map(str::to_owned),
    }
}

#[test]
fn from_json_reads_importer_output() {
    init_logger();
    let table = LandlineTable::from_json(TEST_LANDLINE_TABLE).unwrap();
    assert_eq!(table.area_code_count(), 6);
    assert!(!table.is_empty());
    assert_eq!(
        table.exchange_info("04", "2900"),
        Some(&info("所沢", None, Some("未使用")))
    );
    // missing keys are absent, not an error
    assert_eq!(
        table.exchange_info("01456", "2"),
        Some(&info("門別", Some("NTT東日本"), None))
    );
}

#[test]
fn from_json_accepts_camel_case_keys() {
    let json = r#"{"0422": {"51": {"managingArea": "武蔵野三鷹", "carrier": null, "status": null}}}"#;
    let table = LandlineTable::from_json(json).unwrap();
    assert_eq!(table.exchange_info("0422", "51"), Some(&info("武蔵野三鷹", None, None)));
}

#[test]
fn from_reader_reads_bytes() {
    let table = LandlineTable::from_reader(TEST_LANDLINE_TABLE.as_bytes()).unwrap();
    assert_eq!(table.area_code_count(), 6);
}

#[test]
fn empty_table() {
    let table = LandlineTable::from_json("{}").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.area_code_for("0312345678"), None);
    assert!(LandlineTable::new().is_empty());
}

#[test]
fn invalid_json_is_rejected() {
    assert!(matches!(
        LandlineTable::from_json("[\"03\"]"),
        Err(LandlineTableError::Json(_))
    ));
    assert!(matches!(
        LandlineTable::from_json("{\"03\": {\"1234\": {\"carrier\": 1}}}"),
        Err(LandlineTableError::Json(_))
    ));
}

#[test]
fn invalid_codes_are_rejected() {
    let mut table = LandlineTable::new();
    for area_code in ["", "3", "0x", "012345", "０３"] {
        assert!(
            matches!(
                table.insert_area_code(area_code),
                Err(LandlineTableError::InvalidAreaCode(ref code)) if code == area_code
            ),
            "{area_code:?} should be rejected"
        );
    }
    assert!(matches!(
        table.insert("03", "12-3", LandlineInfo::default()),
        Err(LandlineTableError::InvalidExchangeCode { .. })
    ));
    assert!(matches!(
        table.insert("03", "", LandlineInfo::default()),
        Err(LandlineTableError::InvalidExchangeCode { .. })
    ));
    assert!(table.is_empty());
}

#[test]
fn area_code_longest_match() {
    let mut table = LandlineTable::new();
    table.insert_area_code("03").unwrap();
    table.insert_area_code("033").unwrap();
    table.insert_area_code("0422").unwrap();
    table.insert_area_code("04").unwrap();

    assert_eq!(table.area_code_for("0331234567"), Some("033"));
    assert_eq!(table.area_code_for("0312345678"), Some("03"));
    assert_eq!(table.area_code_for("0422512345"), Some("0422"));
    assert_eq!(table.area_code_for("0429001234"), Some("04"));
    assert_eq!(table.area_code_for("0612345678"), None);
    // shorter than some registered codes
    assert_eq!(table.area_code_for("03"), Some("03"));
    assert_eq!(table.area_code_for("0"), None);
}

#[test]
fn exchange_code_longest_match() {
    let mut table = LandlineTable::new();
    table.insert("03", "123", info("東京", Some("KDDI"), None)).unwrap();
    table.insert("03", "1234", info("東京", Some("NTT東日本"), None)).unwrap();

    assert_eq!(table.exchange_info("03", "1234").unwrap().carrier.as_deref(), Some("NTT東日本"));
    assert_eq!(table.exchange_info("03", "1239").unwrap().carrier.as_deref(), Some("KDDI"));
    assert_eq!(table.exchange_info("03", "9999"), None);
    assert_eq!(table.exchange_info("06", "1234"), None);
}

#[test]
fn insert_replaces_duplicate_exchange() {
    init_logger();
    let mut table = LandlineTable::new();
    table.insert("03", "1234", info("東京", Some("KDDI"), None)).unwrap();
    table.insert("03", "1234", info("東京", Some("NTT東日本"), None)).unwrap();
    assert_eq!(table.area_code_count(), 1);
    assert_eq!(table.exchange_info("03", "1234").unwrap().carrier.as_deref(), Some("NTT東日本"));
}
