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

use crate::{
    errors::DecomposeError, interfaces::NumberMatcher, JpNumberUtil, NumberKind,
    PhoneNumberRecord,
};

/// Handle to the rules of one [`NumberKind`], borrowed from a [`JpNumberUtil`].
///
/// ```
/// use jp_phonenumber::{JpNumberUtil, NumberKind, NumberMatcher};
///
/// let util = JpNumberUtil::default();
/// let m2m = util.matcher(NumberKind::M2m);
/// assert!(m2m.is_applicable("02012345678"));
/// assert_eq!(m2m.decompose("02001234567890").unwrap().to_string(), "0200-12345-67890");
/// assert!(m2m.decompose("03012345678").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FormatMatcher<'a> {
    kind: NumberKind,
    util: &'a JpNumberUtil,
}

impl<'a> FormatMatcher<'a> {
    pub(crate) fn new(kind: NumberKind, util: &'a JpNumberUtil) -> Self {
        Self { kind, util }
    }
}

impl NumberMatcher for FormatMatcher<'_> {
    fn kind(&self) -> NumberKind {
        self.kind
    }

    fn is_applicable(&self, number: &str) -> bool {
        self.util.is_applicable(self.kind, number)
    }

    fn decompose(&self, number: &str) -> Result<PhoneNumberRecord, DecomposeError> {
        self.util.decompose(self.kind, number)
    }
}
