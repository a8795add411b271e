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

use serde::{Serialize, Serializer};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Segments of the Japanese numbering plan recognised by this crate.
///
/// Every kind can be looked up by a stable name (`"Mobile"`, `"IPPhone"`, ...)
/// and by the class-like name used by older tooling (`"MobilePhoneNumber"`,
/// `"IPPhoneNumber"`, ...):
///
/// ```
/// use std::str::FromStr;
/// use jp_phonenumber::NumberKind;
///
/// assert_eq!(NumberKind::from_str("IPPhone"), Ok(NumberKind::IpPhone));
/// assert_eq!(NumberKind::from_str("M2MNumber"), Ok(NumberKind::M2m));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    EnumIter, EnumString, AsRefStr, Display, IntoStaticStr,
)]
pub enum NumberKind {
    /// **Landline numbers** (固定電話番号), `0ABCDEFGHJ`.
    /// The area code is resolved through the landline table.
    #[strum(to_string = "Landline", serialize = "LandLinePhoneNumber")]
    Landline,
    /// **Voice mobile numbers** (音声伝送携帯電話番号), `0[6-9]0-[1-9]XXX-XXXX`.
    #[strum(to_string = "Mobile", serialize = "MobilePhoneNumber")]
    Mobile,
    /// **IP phone numbers** (特定IP電話番号), `050-[1-9]XXX-XXXX`.
    #[strum(to_string = "IPPhone", serialize = "IpPhone", serialize = "IPPhoneNumber")]
    IpPhone,
    /// **Fixed-mobile convergence numbers** (FMC電話番号), `060-0XXX-XXXX`.
    #[strum(to_string = "FMC", serialize = "Fmc", serialize = "FMCPhoneNumber")]
    Fmc,
    /// **Service numbers** (付加的役務電話番号) such as free dial `0120`
    /// and navi dial `0570`.
    #[strum(to_string = "Service", serialize = "ServicePhoneNumber")]
    Service,
    /// **Machine-to-machine numbers** (M2M等専用番号), 11 digits `020` or
    /// 14 digits `0200`.
    #[strum(to_string = "M2M", serialize = "M2m", serialize = "M2MNumber")]
    M2m,
    /// **Pocket bell numbers** (無線呼出番号), `0204...`.
    #[strum(to_string = "PocketBell", serialize = "PocketBellNumber")]
    PocketBell,
    /// **IMSI** of a Japanese SIM, 15 digits starting with the MCC `44`.
    #[strum(to_string = "IMSI", serialize = "Imsi")]
    Imsi,
}

impl NumberKind {
    /// Human readable name used in error messages, with its article.
    pub fn description(self) -> &'static str {
        match self {
            NumberKind::Landline => "a landline number",
            NumberKind::Mobile => "a mobile phone number",
            NumberKind::IpPhone => "an IP phone number",
            NumberKind::Fmc => "an FMC phone number",
            NumberKind::Service => "a service phone number",
            NumberKind::M2m => "an M2M number",
            NumberKind::PocketBell => "a pocket bell number",
            NumberKind::Imsi => "an IMSI",
        }
    }
}

impl Serialize for NumberKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}
