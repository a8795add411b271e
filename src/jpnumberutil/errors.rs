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

use thiserror::Error;

use super::NumberKind;

/// Returned when a single matcher is asked to decompose a number that is
/// not of its kind. Callers are expected to check `is_applicable` first or
/// to go through the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{number} is not {}", .kind.description())]
pub struct DecomposeError {
    pub kind: NumberKind,
    pub number: String,
}

impl DecomposeError {
    pub fn new(kind: NumberKind, number: &str) -> Self {
        Self { kind, number: number.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionsError {
    #[error("Unknown number kind: {0}")]
    UnknownNumberKind(String),
}

#[derive(Debug, Error)]
pub enum LandlineTableError {
    #[error("Failed to read landline table: {0}")]
    Json(#[from] serde_json::Error),

    /// Area codes are 1 to 5 ascii digits starting with `0`.
    #[error("Invalid area code '{0}'")]
    InvalidAreaCode(String),

    #[error("Invalid exchange code '{exchange_code}' for area code {area_code}")]
    InvalidExchangeCode {
        area_code: String,
        exchange_code: String,
    },
}
