use crate::jpnumberutil::{helper_types::ServicePrefix, NumberKind};

/// Kinds tried by `parse` when no options are given. Service, FMC, M2M,
/// pocket bell and IMSI numbers have to be requested explicitly.
pub const DEFAULT_NUMBER_KINDS: [NumberKind; 3] =
    [NumberKind::Landline, NumberKind::Mobile, NumberKind::IpPhone];

// Landline numbers are always 10 digits including the leading 0 and end
// with a 4 digit subscriber number.
pub const LANDLINE_NUMBER_LENGTH: usize = 10;
pub const LANDLINE_SUBSCRIBER_LENGTH: usize = 4;
/// The longest area code in the MIC table is 5 digits (e.g. 01456).
pub const MAX_AREA_CODE_LENGTH: usize = 5;

// Each pattern has exactly three capturing groups: area code, local number
// and subscriber number. They are anchored when compiled.
pub const MOBILE_PATTERN: &'static str = r"(060|070|080|090)([1-9][0-9]{3})([0-9]{4})";
pub const FMC_PATTERN: &'static str = r"(060)(0[0-9]{3})([0-9]{4})";
pub const IP_PHONE_PATTERN: &'static str = r"(050)([1-9][0-9]{3})([0-9]{4})";
// The 14 digit form has to be tried first, the 11 digit one excludes 0200 and
// the pocket bell range 0204.
pub const M2M_14_DIGITS_PATTERN: &'static str = r"(0200)([0-9]{5})([0-9]{5})";
pub const M2M_11_DIGITS_PATTERN: &'static str = r"(020)([1-35-9][0-9]{3})([0-9]{4})";
// Only the 0204 prefix is checked. Local number takes up to 4 digits and the
// rest, possibly nothing, is the subscriber number.
pub const POCKET_BELL_PATTERN: &'static str = r"(020)(4[0-9]{0,3})([0-9]*)";
// MCC 44 followed by a fixed 9 + 4 positional split.
pub const IMSI_PATTERN: &'static str = r"(44)([0-9]{9})([0-9]{4})";

pub(crate) const SERVICE_PREFIXES: [ServicePrefix; 6] = [
    ServicePrefix::new("0120", 10, 3), // free dial
    ServicePrefix::new("0170", 10, 3),
    ServicePrefix::new("0180", 10, 3), // telephone voting
    ServicePrefix::new("0570", 10, 3), // navi dial
    ServicePrefix::new("0800", 11, 4), // free dial
    ServicePrefix::new("0990", 10, 3), // dial Q2
];

/// Separators that `normalize_number` drops: hyphen-minus, hyphen and dash
/// variants, minus sign, katakana prolonged mark, full-width hyphen-minus,
/// spaces, dots and parentheses.
pub const NUMBER_SEPARATORS: &'static [char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
    '\u{30FC}', '\u{FF0D}', ' ', '\u{00A0}', '\u{3000}', '.', '\u{FF0E}', '(', ')',
    '\u{FF08}', '\u{FF09}',
];
