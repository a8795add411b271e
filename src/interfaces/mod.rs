use crate::{errors::DecomposeError, NumberKind, PhoneNumberRecord};

/// Recogniser and decomposer of one segment of the numbering plan.
///
/// Implementations must derive both operations from the same rule so that
/// `decompose` succeeds exactly when `is_applicable` is true.
pub trait NumberMatcher {
    fn kind(&self) -> NumberKind;

    /// Whether `number` belongs to this segment. Never fails.
    fn is_applicable(&self, number: &str) -> bool;

    /// Splits `number`, or names this segment in the error if `number` does
    /// not belong to it.
    fn decompose(&self, number: &str) -> Result<PhoneNumberRecord, DecomposeError>;
}
