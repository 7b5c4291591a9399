use chrono::NaiveDate;

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// `YYYY-MM-DD`, or `--` when the date is not set.
pub fn fmt_optional(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format(DATE_FMT).to_string(),
        None => "--".to_string(),
    }
}

/// Serde adapter for optional calendar dates stored as `"YYYY-MM-DD"`,
/// with the empty string standing for "not set".
pub mod optional_date {
    use super::DATE_FMT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_str(&d.format(DATE_FMT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FMT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
