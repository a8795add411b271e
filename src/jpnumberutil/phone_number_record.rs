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

use std::fmt;

use serde::Serialize;

use super::{helper_types::SplitPoints, landline_table::LandlineInfo, NumberKind};

/// A decomposed Japanese telephone number.
///
/// The three digit groups always concatenate back to the number they were
/// produced from. They are kept as strings, leading zeros are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberRecord {
    kind: NumberKind,
    area_code: String,
    local_number: String,
    subscriber_number: String,
    /// Only for landline numbers whose exchange code is in the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    landline_info: Option<LandlineInfo>,
}

impl PhoneNumberRecord {
    pub(crate) fn from_split(kind: NumberKind, number: &str, split: SplitPoints) -> Self {
        let (area_code, local_number, subscriber_number) = split.apply(number);
        Self {
            kind,
            area_code: area_code.to_owned(),
            local_number: local_number.to_owned(),
            subscriber_number: subscriber_number.to_owned(),
            landline_info: None,
        }
    }

    pub(crate) fn with_landline_info(mut self, landline_info: Option<LandlineInfo>) -> Self {
        self.landline_info = landline_info;
        self
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn local_number(&self) -> &str {
        &self.local_number
    }

    pub fn subscriber_number(&self) -> &str {
        &self.subscriber_number
    }

    pub fn landline_info(&self) -> Option<&LandlineInfo> {
        self.landline_info.as_ref()
    }

    pub fn managing_area(&self) -> Option<&str> {
        self.landline_info.as_ref()?.managing_area.as_deref()
    }

    pub fn carrier(&self) -> Option<&str> {
        self.landline_info.as_ref()?.carrier.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.landline_info.as_ref()?.status.as_deref()
    }

    /// The undecorated digit string, identical to the parsed input.
    pub fn digits(&self) -> String {
        fast_cat::concat_str!(&self.area_code, &self.local_number, &self.subscriber_number)
    }
}

/// Formats as `area-local-subscriber`, e.g. `03-1234-5678` or `0120-123-456`.
impl fmt::Display for PhoneNumberRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = fast_cat::concat_str!(
            &self.area_code, "-", &self.local_number, "-", &self.subscriber_number
        );
        f.write_str(&formatted)
    }
}
