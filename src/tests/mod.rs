mod landline_table_tests;

use std::sync::Once;

use crate::{JpNumberUtil, LandlineTable};
use test_landline_table::TEST_LANDLINE_TABLE;

static ONCE: Once = Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}

// Util backed by the small fixture table, built for each test.
pub(crate) fn get_util() -> JpNumberUtil {
    init_logger();
    let table = LandlineTable::from_json(TEST_LANDLINE_TABLE)
        .expect("Test landline table should be valid");
    JpNumberUtil::new(table)
}
