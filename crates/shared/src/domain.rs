use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One launch attempt as returned by `/api/launches`.
///
/// Every field is optional on the wire; absent keys decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchRecord {
    pub launch_tag: Option<String>,
    pub launch_datetime_utc: Option<String>,
    pub launch_date_raw: Option<String>,
    pub launch_agency: Option<String>,
    pub lv_state: Option<String>,
    pub lv_type: Option<String>,
    pub launch_site: Option<String>,
    pub launch_code: Option<String>,
    pub name: Option<String>,
    pub plname: Option<String>,
}

impl LaunchRecord {
    /// Calendar date of the launch in UTC, falling back to the raw catalog date.
    pub fn display_date(&self) -> String {
        self.launch_datetime_utc
            .as_deref()
            .filter(|value| !value.is_empty())
            .and_then(utc_calendar_date)
            .or_else(|| self.launch_date_raw.clone())
            .unwrap_or_default()
    }

    /// Primary payload name, or the alternate name when the primary is empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.plname.as_deref().unwrap_or_default(),
        }
    }

    /// Row identity: the launch tag, or a positional key when the tag is missing.
    pub fn row_key(&self, index: usize) -> String {
        match self.launch_tag.as_deref() {
            Some(tag) => tag.to_string(),
            None => format!("launch-{index}"),
        }
    }
}

fn utc_calendar_date(value: &str) -> Option<String> {
    let date = if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        parsed.with_timezone(&Utc).date_naive()
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        naive.and_utc().date_naive()
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?
    };
    Some(date.format("%Y-%m-%d").to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyCount {
    pub year: i32,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptsCount {
    #[serde(default)]
    pub count: u64,
}

/// Known values for each filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub agencies: Vec<String>,
    pub states: Vec<String>,
    pub lv_types: Vec<String>,
    pub sites: Vec<String>,
}

impl FilterOptions {
    pub fn values(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Agency => &self.agencies,
            FilterField::State => &self.states,
            FilterField::LvType => &self.lv_types,
            FilterField::Site => &self.sites,
            FilterField::Since | FilterField::Until => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Since,
    Until,
    Agency,
    State,
    LvType,
    Site,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Since,
        FilterField::Until,
        FilterField::Agency,
        FilterField::State,
        FilterField::LvType,
        FilterField::Site,
    ];

    pub fn query_key(self) -> &'static str {
        match self {
            FilterField::Since => "since",
            FilterField::Until => "until",
            FilterField::Agency => "agency",
            FilterField::State => "state",
            FilterField::LvType => "lv_type",
            FilterField::Site => "site",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Since => "Since (inclusive)",
            FilterField::Until => "Until (exclusive)",
            FilterField::Agency => "Agency",
            FilterField::State => "Launch state",
            FilterField::LvType => "Launch vehicle type",
            FilterField::Site => "Launch site",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, FilterField::Since | FilterField::Until)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}

/// Ingestion metadata from `/api/meta/schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMeta {
    pub ingestion_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ingest_time: Option<String>,
    pub row_count: u64,
    pub distinct_launch_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LaunchRecord {
        LaunchRecord::default()
    }

    #[test]
    fn display_date_uses_utc_calendar_date_from_timestamp() {
        let launch = LaunchRecord {
            launch_datetime_utc: Some("2021-06-01T12:00:00Z".to_string()),
            launch_date_raw: Some("2021 Jun  1".to_string()),
            ..record()
        };
        assert_eq!(launch.display_date(), "2021-06-01");
    }

    #[test]
    fn display_date_normalizes_offsets_to_utc() {
        let launch = LaunchRecord {
            launch_datetime_utc: Some("2021-06-01T01:30:00+05:00".to_string()),
            ..record()
        };
        assert_eq!(launch.display_date(), "2021-05-31");
    }

    #[test]
    fn display_date_treats_naive_timestamp_as_utc() {
        let launch = LaunchRecord {
            launch_datetime_utc: Some("1957-10-04T19:28:34".to_string()),
            ..record()
        };
        assert_eq!(launch.display_date(), "1957-10-04");
    }

    #[test]
    fn display_date_falls_back_to_raw_date() {
        let launch = LaunchRecord {
            launch_date_raw: Some("1958-02-01".to_string()),
            ..record()
        };
        assert_eq!(launch.display_date(), "1958-02-01");

        let unparseable = LaunchRecord {
            launch_datetime_utc: Some("sometime in 1958".to_string()),
            launch_date_raw: Some("1958 Feb  1".to_string()),
            ..record()
        };
        assert_eq!(unparseable.display_date(), "1958 Feb  1");
        assert_eq!(record().display_date(), "");
    }

    #[test]
    fn display_name_falls_back_to_alternate_name() {
        let launch = LaunchRecord {
            name: Some(String::new()),
            plname: Some("Explorer 1".to_string()),
            ..record()
        };
        assert_eq!(launch.display_name(), "Explorer 1");

        let named = LaunchRecord {
            name: Some("Sputnik 1".to_string()),
            plname: Some("PS-1".to_string()),
            ..record()
        };
        assert_eq!(named.display_name(), "Sputnik 1");
        assert_eq!(record().display_name(), "");
    }

    #[test]
    fn row_key_prefers_launch_tag() {
        let tagged = LaunchRecord {
            launch_tag: Some("1957-001".to_string()),
            ..record()
        };
        assert_eq!(tagged.row_key(3), "1957-001");
        assert_eq!(record().row_key(3), "launch-3");
    }

    #[test]
    fn launch_record_tolerates_missing_keys() {
        let parsed: LaunchRecord =
            serde_json::from_str(r#"{"launch_tag":"1958-ALP","name":null}"#).expect("decode");
        assert_eq!(parsed.launch_tag.as_deref(), Some("1958-ALP"));
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.plname, None);
    }
}
