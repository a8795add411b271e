//! Classification and decomposition of Japanese telephone numbers following
//! the numbering plan published by the Ministry of Internal Affairs and
//! Communications (総務省).
//!
//! A number is split into area code, local number and subscriber number by
//! the first matching [`NumberKind`]; see [`JpNumberUtil`].

mod interfaces;
mod jpnumberutil;
mod format_matcher;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::NumberMatcher;
pub use format_matcher::FormatMatcher;
pub use jpnumberutil::{
    errors, DEFAULT_NUMBER_KINDS, NumberKind,
    jpnumberutil::JpNumberUtil,
    landline_table::{LandlineInfo, LandlineTable},
    parse_options::ParseOptions,
    phone_number_record::PhoneNumberRecord,
};
pub use string_util::normalize_number;
