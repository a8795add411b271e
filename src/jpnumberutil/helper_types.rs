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

/// One row of the service number table: numbers starting with `prefix` are
/// exactly `length` digits and end with `subscriber_length` subscriber digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ServicePrefix {
    pub prefix: &'static str,
    pub length: usize,
    pub subscriber_length: usize,
}

impl ServicePrefix {
    pub const fn new(prefix: &'static str, length: usize, subscriber_length: usize) -> Self {
        Self { prefix, length, subscriber_length }
    }

    pub fn split(&self, number: &str) -> Option<SplitPoints> {
        if number.len() != self.length || !number.starts_with(self.prefix) {
            return None;
        }
        Some(SplitPoints::new(
            self.prefix.len(),
            number.len() - self.subscriber_length,
        ))
    }
}

/// Byte offsets at which the area code and the local number end. Everything
/// after `local_number_end` is the subscriber number, so applying the split
/// can never drop or invent a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplitPoints {
    pub area_code_end: usize,
    pub local_number_end: usize,
}

impl SplitPoints {
    pub fn new(area_code_end: usize, local_number_end: usize) -> Self {
        debug_assert!(area_code_end <= local_number_end);
        Self { area_code_end, local_number_end }
    }

    /// Returns `(area_code, local_number, subscriber_number)`.
    pub fn apply<'a>(&self, number: &'a str) -> (&'a str, &'a str, &'a str) {
        let (head, subscriber_number) = number.split_at(self.local_number_end);
        let (area_code, local_number) = head.split_at(self.area_code_end);
        (area_code, local_number, subscriber_number)
    }
}
