use shared::{domain::LaunchRecord, protocol::PAGE_SIZE};

pub const TABLE_COLUMNS: [&str; 7] = [
    "Date",
    "Launch tag",
    "Vehicle",
    "Agency",
    "Site",
    "State",
    "Name",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRow {
    pub key: String,
    pub date: String,
    pub launch_tag: String,
    pub vehicle: String,
    pub agency: String,
    pub site: String,
    pub state: String,
    pub name: String,
}

impl LaunchRow {
    pub fn from_record(index: usize, record: &LaunchRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            key: record.row_key(index),
            date: record.display_date(),
            launch_tag: text(&record.launch_tag),
            vehicle: text(&record.lv_type),
            agency: text(&record.launch_agency),
            site: text(&record.launch_site),
            state: text(&record.lv_state),
            name: record.display_name().to_string(),
        }
    }

    /// Cell values in [`TABLE_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.date.as_str(),
            self.launch_tag.as_str(),
            self.vehicle.as_str(),
            self.agency.as_str(),
            self.site.as_str(),
            self.state.as_str(),
            self.name.as_str(),
        ]
    }
}

pub fn launch_rows(records: &[LaunchRecord]) -> Vec<LaunchRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| LaunchRow::from_record(index, record))
        .collect()
}

/// Previous/next availability for the current launch page.
///
/// A short page is the only end-of-results signal, so a final page that is
/// exactly full still offers "Next" and the following fetch comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u32,
    pub row_count: usize,
}

impl Pagination {
    pub fn new(offset: u32, row_count: usize) -> Self {
        Self { offset, row_count }
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        self.row_count >= PAGE_SIZE as usize
    }

    pub fn range_label(&self) -> String {
        format!(
            "Showing {} - {}",
            u64::from(self.offset) + 1,
            u64::from(self.offset) + self.row_count as u64
        )
    }
}
