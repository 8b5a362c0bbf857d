use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::deserializers::number_or_string;
pub use super::deserializers::{Holiday, NullString, RemoteAddress, Version};

/// An address associated with a postal code defined by JP POST.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub jisx0402: String,
    pub old_code: String,
    pub postal_code: String,
    pub prefecture_kana: String,
    pub city_kana: String,
    pub town_kana: String,
    pub town_kana_raw: String,
    pub prefecture: String,
    pub city: String,
    pub town: String,
    pub koaza: String,
    pub kyoto_street: String,
    pub building: String,
    pub floor: String,
    /// The town name covers only part of the area
    pub town_partial: bool,
    /// Addresses in the town use koaza instead of block numbers
    pub town_addressed_koaza: bool,
    pub town_chome: bool,
    /// One postal code spans several towns
    pub town_multi: bool,
    pub town_raw: String,
    pub corporation: AddressCorporation,
}

/// Large-volume business recipient that owns an individual postal code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressCorporation {
    pub name: String,
    pub name_kana: String,
    pub block_lot: String,
    pub block_lot_num: NullString,
    pub post_office: String,
    #[serde(deserialize_with = "number_or_string")]
    pub code_type: u64,
}

/// A city associated with a prefecture code defined by JIS X 0401.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub jisx0402: String,
    pub prefecture_code: String,
    pub city_code: String,
    pub prefecture_kana: String,
    pub city_kana: String,
    pub prefecture: String,
    pub city: String,
}

/// A corporation registered with the National Tax Agency under a corporate number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corporation {
    pub published_date: String,
    #[serde(deserialize_with = "number_or_string")]
    pub sequence_number: u64,
    pub corporate_number: String,
    #[serde(deserialize_with = "number_or_string")]
    pub process: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub correct: u64,
    pub update_date: String,
    pub change_date: String,
    pub name: String,
    pub name_image_id: NullString,
    pub kind: String,
    pub prefecture_name: String,
    pub city_name: String,
    pub street_number: String,
    pub town: NullString,
    pub kyoto_street: NullString,
    pub block_lot_num: NullString,
    pub building: NullString,
    pub floor_room: NullString,
    pub address_image_id: NullString,
    pub jisx0402: String,
    pub post_code: String,
    pub address_outside: String,
    pub address_outside_image_id: NullString,
    pub close_date: NullString,
    pub close_cause: NullString,
    pub successor_corporate_number: NullString,
    pub change_cause: String,
    pub assignment_date: String,
    pub en_name: String,
    pub en_prefecture_name: String,
    pub en_address_line: NullString,
    pub en_address_outside: NullString,
    pub furigana: String,
    pub hihyoji: String,
}

impl Corporation {
    /// True when the corporation has a closure date.
    pub fn is_closed(&self) -> bool {
        self.close_date.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// Free-text address split into its components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub q: NullString,
    pub t: NullString,
    pub prefecture: NullString,
    pub county: NullString,
    pub city: NullString,
    pub city_ward: NullString,
    pub town: NullString,
    pub kyoto_street: NullString,
    pub block_lot_num: NullString,
    pub building: NullString,
    pub floor_room: NullString,
}

/// Whether a date is a business day, built from the check endpoint's
/// `{"result": bool}` answer and the date that was asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessDay {
    pub date: NaiveDate,
    pub legal_holiday: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetAddressResponse {
    #[serde(default)]
    pub version: Version,
    #[serde(rename = "data", default)]
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCityResponse {
    #[serde(default)]
    pub version: Version,
    #[serde(rename = "data", default)]
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCorporationResponse {
    #[serde(default)]
    pub version: Version,
    #[serde(rename = "data", default)]
    pub corporation: Corporation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWhoamiResponse {
    #[serde(rename = "remote_addr")]
    pub remote_address: RemoteAddress,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetHolidaysResponse {
    #[serde(rename = "data", default)]
    pub holidays: Vec<Holiday>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetNormalizeAddressResponse {
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub query: Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBusinessDaysResponse {
    pub business_day: BusinessDay,
}

/// Raw body of `/businessdays/check`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct BusinessDayCheck {
    pub result: bool,
}
