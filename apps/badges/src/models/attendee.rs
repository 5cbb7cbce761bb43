use serde::{Deserialize, Serialize};

/// One attendee row from the roster file. Input order is badge order.
///
/// Cells missing from a short row read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendeeRecord {
    #[serde(rename = "First Name", default)]
    pub first_name: String,
    #[serde(rename = "Last Name", default)]
    pub last_name: String,
    #[serde(rename = "Organization", default)]
    pub organization: String,
}

impl AttendeeRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            organization: organization.into(),
        }
    }

    /// First and last name joined by a single space, as printed on the badge.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
