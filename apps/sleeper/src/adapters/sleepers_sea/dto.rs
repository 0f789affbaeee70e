//! DTOs for sleepers_sea adapter.

/// DTO for inserting one sleeper row.
#[derive(Debug, Clone, PartialEq)]
pub struct SleeperCreate {
    pub sleeper_uuid: String,
    pub sleeper_time: f64,
}

impl SleeperCreate {
    pub fn new(sleeper_uuid: impl Into<String>, sleeper_time: f64) -> Self {
        Self {
            sleeper_uuid: sleeper_uuid.into(),
            sleeper_time,
        }
    }
}
