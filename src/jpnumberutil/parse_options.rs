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

use std::str::FromStr;

use strum::IntoEnumIterator;

use super::{errors::ParseOptionsError, helper_constants::DEFAULT_NUMBER_KINDS, NumberKind};

/// Which kinds `parse_with_options` tries, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    types: Vec<NumberKind>,
}

impl Default for ParseOptions {
    /// Landline, mobile and IP phone numbers.
    fn default() -> Self {
        Self { types: DEFAULT_NUMBER_KINDS.to_vec() }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `types` in the given order. Repeated kinds are kept at their
    /// first position only.
    pub fn with_types<I: IntoIterator<Item = NumberKind>>(types: I) -> Self {
        let mut unique = Vec::new();
        for kind in types {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { types: unique }
    }

    /// Every kind, in declaration order of [`NumberKind`].
    pub fn all() -> Self {
        Self { types: NumberKind::iter().collect() }
    }

    /// Resolves kind names such as `"Service"` or `"MobilePhoneNumber"`.
    pub fn from_names<I, S>(names: I) -> Result<Self, ParseOptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                NumberKind::from_str(name)
                    .map_err(|_| ParseOptionsError::UnknownNumberKind(name.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_types(types))
    }

    pub fn types(&self) -> &[NumberKind] {
        &self.types
    }
}

/// Comma separated kind names, e.g. `"Mobile, IPPhone"`.
impl FromStr for ParseOptions {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_names(s.split(',').map(str::trim).filter(|name| !name.is_empty()))
    }
}
