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

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    io::Read,
};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::{errors::LandlineTableError, helper_constants::MAX_AREA_CODE_LENGTH};
use crate::string_util::is_ascii_digits;

/// Data published by MIC for one exchange code (市内局番) of an area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandlineInfo {
    /// Managing area (番号区画), stored as `MA` by the importer.
    #[serde(default, alias = "MA")]
    pub managing_area: Option<String>,
    /// Carrier the exchange code is assigned to.
    #[serde(default)]
    pub carrier: Option<String>,
    /// Operational status of the exchange code.
    #[serde(default)]
    pub status: Option<String>,
}

/// Map from digit prefixes to values that answers "which key is the longest
/// prefix of this string". Lookups cost one hash probe per distinct key
/// length, so at most `MAX_AREA_CODE_LENGTH` probes for area codes.
#[derive(Debug, Clone)]
struct PrefixMap<V> {
    entries: HashMap<String, V>,
    /// Distinct key lengths, probed longest first.
    key_lengths: BTreeSet<usize>,
}

impl<V> Default for PrefixMap<V> {
    fn default() -> Self {
        Self { entries: HashMap::new(), key_lengths: BTreeSet::new() }
    }
}

impl<V> PrefixMap<V> {
    fn insert(&mut self, key: String, value: V) -> Option<V> {
        self.key_lengths.insert(key.len());
        self.entries.insert(key, value)
    }

    fn get_or_insert_default(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        self.key_lengths.insert(key.len());
        self.entries.entry(key.to_owned()).or_default()
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    fn longest_match<'a>(&'a self, s: &str) -> Option<(&'a str, &'a V)> {
        self.key_lengths
            .iter()
            .rev()
            .filter_map(|&len| s.get(..len))
            .find_map(|prefix| self.entries.get_key_value(prefix))
            .map(|(key, value)| (key.as_str(), value))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Landline area codes (市外局番) and the exchange codes registered under
/// each of them.
///
/// The table is produced offline from the MIC spreadsheets and loaded with
/// [`LandlineTable::from_json`]; it may also be filled by hand with
/// [`LandlineTable::insert`]. An empty table is valid, landline numbers are
/// then never recognised.
#[derive(Debug, Clone, Default)]
pub struct LandlineTable {
    areas: PrefixMap<PrefixMap<LandlineInfo>>,
}

impl LandlineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the importer's output:
    /// `{"<area code>": {"<exchange code>": {"MA": .., "carrier": .., "status": ..}}}`.
    pub fn from_json(json: &str) -> Result<Self, LandlineTableError> {
        let raw: BTreeMap<String, BTreeMap<String, LandlineInfo>> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Same as [`LandlineTable::from_json`] for any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LandlineTableError> {
        let raw: BTreeMap<String, BTreeMap<String, LandlineInfo>> =
            serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(
        raw: BTreeMap<String, BTreeMap<String, LandlineInfo>>,
    ) -> Result<Self, LandlineTableError> {
        let mut table = Self::new();
        for (area_code, exchanges) in raw {
            table.insert_area_code(&area_code)?;
            for (exchange_code, info) in exchanges {
                table.insert(&area_code, &exchange_code, info)?;
            }
        }
        trace!("Loaded landline table with {} area codes", table.area_code_count());
        Ok(table)
    }

    /// Registers an area code without any exchange code.
    pub fn insert_area_code(&mut self, area_code: &str) -> Result<(), LandlineTableError> {
        validate_area_code(area_code)?;
        self.areas.get_or_insert_default(area_code);
        Ok(())
    }

    /// Registers `exchange_code` under `area_code`, registering the area code
    /// as well if needed. A second entry for the same pair replaces the first.
    pub fn insert(
        &mut self,
        area_code: &str,
        exchange_code: &str,
        info: LandlineInfo,
    ) -> Result<(), LandlineTableError> {
        validate_area_code(area_code)?;
        if !is_ascii_digits(exchange_code) {
            return Err(LandlineTableError::InvalidExchangeCode {
                area_code: area_code.to_owned(),
                exchange_code: exchange_code.to_owned(),
            });
        }
        let exchanges = self.areas.get_or_insert_default(area_code);
        if exchanges.insert(exchange_code.to_owned(), info).is_some() {
            warn!("Duplicate exchange code {} for area code {}, replacing", exchange_code, area_code);
        }
        Ok(())
    }

    /// Longest registered area code that is a prefix of `number`.
    pub fn area_code_for<'a>(&'a self, number: &str) -> Option<&'a str> {
        self.areas.longest_match(number).map(|(area_code, _)| area_code)
    }

    /// Metadata of the longest exchange code of `area_code` that prefixes
    /// `local_number`.
    pub fn exchange_info(&self, area_code: &str, local_number: &str) -> Option<&LandlineInfo> {
        self.areas
            .get(area_code)?
            .longest_match(local_number)
            .map(|(_, info)| info)
    }

    pub fn area_code_count(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.len() == 0
    }
}

fn validate_area_code(area_code: &str) -> Result<(), LandlineTableError> {
    if !is_ascii_digits(area_code)
        || !area_code.starts_with('0')
        || area_code.len() > MAX_AREA_CODE_LENGTH
    {
        return Err(LandlineTableError::InvalidAreaCode(area_code.to_owned()));
    }
    Ok(())
}
