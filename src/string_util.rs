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

use crate::jpnumberutil::helper_constants::NUMBER_SEPARATORS;

/// Every matcher expects plain ascii decimal digits; anything else is
/// rejected before patterns or tables are consulted.
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Cleans up a number typed by a person so it can be given to the matchers.
///
/// Unicode decimal digits (for example full-width `０９０`) become ascii digits
/// and common separators such as hyphens, spaces, dots and parentheses are
/// dropped. Returns `None` if any other character is present or no digit is
/// left.
///
/// ```
/// use jp_phonenumber::normalize_number;
///
/// assert_eq!(normalize_number("０９０－１２３４－５６７８").as_deref(), Some("09012345678"));
/// assert_eq!(normalize_number("(03) 1234-5678").as_deref(), Some("0312345678"));
/// assert_eq!(normalize_number("090-1234-567x"), None);
/// ```
pub fn normalize_number(number: &str) -> Option<String> {
    let decimals = dec_from_char::normalize_decimals(number);
    let mut normalized = String::with_capacity(decimals.len());
    for c in decimals.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
        } else if !NUMBER_SEPARATORS.contains(&c) {
            return None;
        }
    }
    if normalized.is_empty() {
        return None;
    }
    Some(normalized)
}
