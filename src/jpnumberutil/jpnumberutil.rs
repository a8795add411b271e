// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{debug, trace};
use strum::IntoEnumIterator;

use super::{
    errors::DecomposeError,
    format_descriptors::FormatDescriptors,
    helper_types::SplitPoints,
    landline_table::LandlineTable,
    parse_options::ParseOptions,
    phone_number_record::PhoneNumberRecord,
    NumberKind,
};
use crate::format_matcher::FormatMatcher;

// Helper type for Result
pub type Result<T> = std::result::Result<T, DecomposeError>;

/// Classifies and decomposes Japanese telephone numbers.
///
/// All rules are built once in [`JpNumberUtil::new`] and never change
/// afterwards, so one instance can be shared between threads.
///
/// ```
/// use jp_phonenumber::{JpNumberUtil, NumberKind, ParseOptions};
///
/// let util = JpNumberUtil::default();
///
/// let mobile = util.parse("09012345678").unwrap();
/// assert_eq!(mobile.kind(), NumberKind::Mobile);
/// assert_eq!(mobile.to_string(), "090-1234-5678");
///
/// assert!(util.parse("0120123456").is_none());
/// let options = ParseOptions::with_types([NumberKind::Service]);
/// assert_eq!(util.parse_with_options("0120123456", &options).unwrap().to_string(), "0120-123-456");
/// ```
#[derive(Debug)]
pub struct JpNumberUtil {
    descriptors: FormatDescriptors,

    /// Area codes and exchange codes used by landline numbers. May be empty.
    landline_table: LandlineTable,
}

impl Default for JpNumberUtil {
    /// Util without landline data: landline numbers are never recognised.
    fn default() -> Self {
        Self::new(LandlineTable::new())
    }
}

impl JpNumberUtil {
    pub fn new(landline_table: LandlineTable) -> Self {
        if landline_table.is_empty() {
            debug!("Landline table is empty, landline numbers will not be recognised");
        }
        Self {
            descriptors: FormatDescriptors::new(),
            landline_table,
        }
    }

    pub fn landline_table(&self) -> &LandlineTable {
        &self.landline_table
    }

    /// Matcher of a single kind.
    pub fn matcher(&self, kind: NumberKind) -> FormatMatcher<'_> {
        FormatMatcher::new(kind, self)
    }

    /// Matchers of every kind, in declaration order of [`NumberKind`].
    pub fn matchers(&self) -> impl Iterator<Item = FormatMatcher<'_>> {
        NumberKind::iter().map(|kind| self.matcher(kind))
    }

    /// Whether `number` is a number of `kind`. Never fails: anything that is
    /// not a string of ascii digits is simply not applicable.
    pub fn is_applicable(&self, kind: NumberKind, number: &str) -> bool {
        self.split(kind, number).is_some()
    }

    /// Splits `number` as a number of `kind`.
    ///
    /// Fails with [`DecomposeError`] naming the kind if the number is not of
    /// that kind; use [`JpNumberUtil::parse`] when the kind is not known.
    pub fn decompose(&self, kind: NumberKind, number: &str) -> Result<PhoneNumberRecord> {
        self.split(kind, number)
            .map(|split| self.build_record(kind, number, split))
            .ok_or_else(|| DecomposeError::new(kind, number))
    }

    /// Tries landline, mobile and IP phone numbers in that order.
    pub fn parse(&self, number: &str) -> Option<PhoneNumberRecord> {
        self.parse_with_options(number, &ParseOptions::default())
    }

    /// Decomposes `number` with the first kind of `options` it belongs to.
    /// Returns `None` if it belongs to none of them, which is an ordinary
    /// outcome and not an error.
    pub fn parse_with_options(
        &self,
        number: &str,
        options: &ParseOptions,
    ) -> Option<PhoneNumberRecord> {
        let record = options.types().iter().find_map(|&kind| {
            trace!("Trying to parse {} as {}", number, kind);
            self.split(kind, number)
                .map(|split| self.build_record(kind, number, split))
        });
        if record.is_none() {
            debug!("{} is none of {:?}", number, options.types());
        }
        record
    }

    /// Every kind of `options` that `number` belongs to, in option order.
    /// More than one kind means the options contain overlapping kinds.
    pub fn applicable_kinds(&self, number: &str, options: &ParseOptions) -> Vec<NumberKind> {
        options
            .types()
            .iter()
            .copied()
            .filter(|&kind| self.is_applicable(kind, number))
            .collect()
    }

    fn split(&self, kind: NumberKind, number: &str) -> Option<SplitPoints> {
        self.descriptors.get(kind).split(number, &self.landline_table)
    }

    fn build_record(&self, kind: NumberKind, number: &str, split: SplitPoints) -> PhoneNumberRecord {
        let record = PhoneNumberRecord::from_split(kind, number, split);
        if kind != NumberKind::Landline {
            return record;
        }
        let landline_info = self
            .landline_table
            .exchange_info(record.area_code(), record.local_number())
            .cloned();
        if landline_info.is_none() {
            trace!("No exchange code data for {}", number);
        }
        record.with_landline_info(landline_info)
    }
}
