pub(crate) mod helper_constants;
mod helper_types;
mod format_descriptors;
pub mod errors;
pub mod enums;
pub mod landline_table;
pub mod parse_options;
pub mod phone_number_record;
pub mod jpnumberutil;

pub use enums::NumberKind;
pub use helper_constants::DEFAULT_NUMBER_KINDS;
