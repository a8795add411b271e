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

use regex::Regex;
use strum::IntoEnumIterator;

use super::{
    helper_constants::{
        FMC_PATTERN, IMSI_PATTERN, IP_PHONE_PATTERN, LANDLINE_NUMBER_LENGTH,
        LANDLINE_SUBSCRIBER_LENGTH, M2M_11_DIGITS_PATTERN, M2M_14_DIGITS_PATTERN,
        MOBILE_PATTERN, POCKET_BELL_PATTERN, SERVICE_PREFIXES,
    },
    helper_types::{ServicePrefix, SplitPoints},
    landline_table::LandlineTable,
    NumberKind,
};
use crate::{regex_util::RegexFullMatch, string_util::is_ascii_digits};

/// The rule set of one number kind. Recognition and decomposition both go
/// through [`FormatDescriptor::split`], so they can not disagree.
#[derive(Debug)]
pub(super) enum FormatDescriptor {
    /// Alternatives with three capture groups (area code, local number,
    /// subscriber number), tried in order.
    Patterns(Vec<Regex>),
    /// Fixed prefix, total length and subscriber length rows.
    PrefixTable(&'static [ServicePrefix]),
    /// Longest matching area code of the landline table.
    AreaCodeTable,
}

impl FormatDescriptor {
    fn for_kind(kind: NumberKind) -> Self {
        match kind {
            NumberKind::Landline => FormatDescriptor::AreaCodeTable,
            NumberKind::Mobile => Self::patterns(&[MOBILE_PATTERN]),
            NumberKind::IpPhone => Self::patterns(&[IP_PHONE_PATTERN]),
            NumberKind::Fmc => Self::patterns(&[FMC_PATTERN]),
            NumberKind::Service => FormatDescriptor::PrefixTable(&SERVICE_PREFIXES),
            NumberKind::M2m => Self::patterns(&[M2M_14_DIGITS_PATTERN, M2M_11_DIGITS_PATTERN]),
            NumberKind::PocketBell => Self::patterns(&[POCKET_BELL_PATTERN]),
            NumberKind::Imsi => Self::patterns(&[IMSI_PATTERN]),
        }
    }

    fn patterns(patterns: &[&str]) -> Self {
        FormatDescriptor::Patterns(
            patterns
                .iter()
                .map(|&pattern| {
                    Regex::new(&fast_cat::concat_str!("^(?:", pattern, ")$"))
                        .expect("Invalid constant pattern!")
                })
                .collect(),
        )
    }

    /// Where `number` splits into area code, local number and subscriber
    /// number, or `None` if it is not of this kind.
    pub fn split(&self, number: &str, landline_table: &LandlineTable) -> Option<SplitPoints> {
        if !is_ascii_digits(number) {
            return None;
        }
        match self {
            FormatDescriptor::Patterns(patterns) => patterns.iter().find_map(|pattern| {
                let captures = pattern.full_captures(number)?;
                Some(SplitPoints::new(captures.get(1)?.end(), captures.get(2)?.end()))
            }),
            FormatDescriptor::PrefixTable(prefixes) => {
                prefixes.iter().find_map(|prefix| prefix.split(number))
            }
            FormatDescriptor::AreaCodeTable => {
                if number.len() != LANDLINE_NUMBER_LENGTH {
                    return None;
                }
                let area_code = landline_table.area_code_for(number)?;
                Some(SplitPoints::new(
                    area_code.len(),
                    number.len() - LANDLINE_SUBSCRIBER_LENGTH,
                ))
            }
        }
    }
}

/// Descriptors of every [`NumberKind`], compiled once per util.
#[derive(Debug)]
pub(super) struct FormatDescriptors {
    /// Indexed by `NumberKind as usize`.
    descriptors: Vec<FormatDescriptor>,
}

impl FormatDescriptors {
    pub fn new() -> Self {
        Self {
            descriptors: NumberKind::iter().map(FormatDescriptor::for_kind).collect(),
        }
    }

    pub fn get(&self, kind: NumberKind) -> &FormatDescriptor {
        &self.descriptors[kind as usize]
    }
}
