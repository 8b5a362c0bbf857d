use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Weekday};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Wire format of every date the kenall service sends or accepts.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// UTC offset of Japan Standard Time, which has no daylight saving.
const JST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Japan Standard Time as a fixed offset.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

/// Parse a date that is exactly `YYYY-MM-DD`: ten bytes, zero-padded, no sign
/// and no surrounding whitespace.
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let shaped = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err("expected YYYY-MM-DD".to_string());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| e.to_string())
}

/// Version-controlled date of the data a response was built from.
///
/// `null` on the wire decodes to the zero version rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Version(Option<NaiveDate>);

impl Version {
    pub fn new(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }
}

impl From<NaiveDate> for Version {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a YYYY-MM-DD date string or null")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Version::default())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Version::default())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(self)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                parse_date(value).map(Version::new).map_err(|e| {
                    E::custom(format!(
                        "kenall: failed to parse date with RFC3339 Date: {:?}: {}",
                        value, e
                    ))
                })
            }
        }

        deserializer.deserialize_option(VersionVisitor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

/// A string that may be null, keeping `""` and `null` apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NullString(Option<String>);

impl NullString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn null() -> Self {
        Self(None)
    }

    /// True when the field was present and not null.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The value, or `""` when null.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    pub fn into_option(self) -> Option<String> {
        self.0
    }
}

impl From<Option<String>> for NullString {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for NullString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for NullString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NullString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NullStringVisitor;

        impl<'de> Visitor<'de> for NullStringVisitor {
            type Value = NullString;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or null")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(NullString::null())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(NullString::null())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(self)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(NullString::new(value))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(NullString::new(value))
            }
        }

        deserializer.deserialize_option(NullStringVisitor)
    }
}

impl Serialize for NullString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }
}

/// The IP address a request reached the kenall service from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteAddress {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl RemoteAddress {
    /// Wire tag: `"v4"` or `"v6"`.
    pub fn address_type(&self) -> &'static str {
        match self {
            Self::V4(_) => "v4",
            Self::V6(_) => "v6",
        }
    }

    pub fn ip(&self) -> IpAddr {
        match self {
            Self::V4(ip) => IpAddr::V4(*ip),
            Self::V6(ip) => IpAddr::V6(*ip),
        }
    }

    /// Network family name; the same for both address versions.
    pub fn network(&self) -> &'static str {
        "ip"
    }
}

impl From<RemoteAddress> for IpAddr {
    fn from(address: RemoteAddress) -> Self {
        address.ip()
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(ip) => ip.fmt(f),
            Self::V6(ip) => ip.fmt(f),
        }
    }
}

#[derive(Deserialize)]
struct RawRemoteAddress {
    #[serde(rename = "type")]
    kind: String,
    address: String,
}

#[derive(Serialize)]
struct WireRemoteAddress {
    #[serde(rename = "type")]
    kind: &'static str,
    address: String,
}

impl<'de> Deserialize<'de> for RemoteAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRemoteAddress::deserialize(deserializer)?;
        let resolve_error = |e: std::net::AddrParseError| -> D::Error {
            de::Error::custom(format!(
                "kenall: failed to resolve IP address {:?} as {}: {}",
                raw.address, raw.kind, e
            ))
        };

        match raw.kind.as_str() {
            "v4" => raw.address.parse().map(Self::V4).map_err(resolve_error),
            // A zone such as `%en0` is accepted and dropped
            "v6" => strip_zone(&raw.address)
                .parse()
                .map(Self::V6)
                .map_err(resolve_error),
            other => Err(de::Error::custom(format!(
                "kenall: undefined type of RemoteAddress, type = {}",
                other
            ))),
        }
    }
}

fn strip_zone(address: &str) -> &str {
    match address.split_once('%') {
        Some((ip, zone)) if !zone.is_empty() => ip,
        _ => address,
    }
}

impl Serialize for RemoteAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireRemoteAddress {
            kind: self.address_type(),
            address: self.to_string(),
        }
        .serialize(serializer)
    }
}

/// A national holiday of Japan.
///
/// Only `title` and `date` are kept; the weekday fields of the wire record
/// are always derived from the date when encoding and ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Deserialize)]
struct RawHoliday {
    #[serde(default)]
    title: String,
    date: String,
}

#[derive(Serialize)]
struct WireHoliday<'a> {
    title: &'a str,
    date: String,
    day_of_week: u32,
    day_of_week_text: &'static str,
}

impl Holiday {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.weekday().num_days_from_sunday()
    }

    pub fn day_of_week_text(&self) -> &'static str {
        weekday_text(self.weekday())
    }

    /// Midnight of the holiday in Japan Standard Time.
    pub fn time(&self) -> DateTime<FixedOffset> {
        let midnight = self.date.and_time(NaiveTime::MIN);
        jst().from_utc_datetime(&(midnight - Duration::seconds(JST_OFFSET_SECS.into())))
    }
}

/// Lowercase English name of a weekday.
pub fn weekday_text(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl<'de> Deserialize<'de> for Holiday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawHoliday::deserialize(deserializer)?;
        let date = parse_date(&raw.date).map_err(|e| {
            de::Error::custom(format!(
                "kenall: failed to parse Holiday date {:?}: {}",
                raw.date, e
            ))
        })?;

        Ok(Holiday::new(raw.title, date))
    }
}

impl Serialize for Holiday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireHoliday {
            title: &self.title,
            date: self.date.format(DATE_FORMAT).to_string(),
            day_of_week: self.day_of_week(),
            day_of_week_text: self.day_of_week_text(),
        }
        .serialize(serializer)
    }
}

/// Deserialize an unsigned integer sent either as a JSON number or as a
/// numeric string. `null` becomes 0.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberOrString;

    impl<'de> Visitor<'de> for NumberOrString {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an unsigned integer or a numeric string")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            u64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(NumberOrString)
}
