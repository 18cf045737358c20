use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking status of a slot as stored in the sheet. The backend may grow
/// statuses this component does not know about; those must still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Booked,
    #[serde(other)]
    Other,
}

/// One offerable appointment window, one row in the sheet.
///
/// The client-side fields stay empty until a client books the slot through
/// the separate client-facing interface; this component never writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub status: SlotStatus,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub zoom_option: Option<String>,
}

impl Slot {
    /// A fresh owner-created slot: generated id, forced Available, empty
    /// client fields.
    pub fn new_available(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: generate_slot_id(),
            date,
            time,
            status: SlotStatus::Available,
            client_name: None,
            client_email: None,
            booking_date: None,
            zoom_option: None,
        }
    }
}

/// Ids follow the `slot_<epoch-millis>` pattern the sheet rows use.
fn generate_slot_id() -> String {
    format!("slot_{}", Utc::now().timestamp_millis())
}

/// The sheet stores times as 24-hour `HH:MM`, not the chrono default
/// `HH:MM:SS`.
pub(crate) mod hh_mm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
