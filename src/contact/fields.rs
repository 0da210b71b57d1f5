//! Column lookups for name, phone and contact preference

use super::phone::normalize_phone;
use crate::source::Row;

/// Columns tried, in order, for the display name
pub const NAME_FIELDS: &[&str] = &["Name", "First Name"];
/// Columns tried, in order, for the phone number
pub const PHONE_FIELDS: &[&str] = &["Phone", "Phone Number", "Phone number"];
/// Optional columns holding the preferred channel
pub const PREFERENCE_FIELDS: &[&str] = &["Preferred Communication", "Communication"];
/// Greeting used when the row has no name
pub const DEFAULT_NAME: &str = "there";

/// Raw contact fields pulled out of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields<'a> {
    pub name: &'a str,
    pub raw_phone: &'a str,
    /// Lowercased preference, when the row states one
    pub preference: Option<String>,
}

/// A reachable contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    /// E.164 formatted number
    pub phone: String,
}

impl<'a> ContactFields<'a> {
    pub fn from_row(row: &'a Row) -> Self {
        Self {
            name: row.first_non_empty(NAME_FIELDS).unwrap_or(DEFAULT_NAME),
            raw_phone: row.first_non_empty(PHONE_FIELDS).unwrap_or_default(),
            preference: row
                .first_non_empty(PREFERENCE_FIELDS)
                .map(str::to_lowercase),
        }
    }

    /// False only when a preference is given and it is not text
    pub fn accepts_text(&self) -> bool {
        self.preference
            .as_deref()
            .is_none_or(|preference| preference.contains("text"))
    }

    /// The contact, if the phone number normalizes
    pub fn contact(&self) -> Option<Contact> {
        normalize_phone(self.raw_phone).map(|phone| Contact {
            name: self.name.to_string(),
            phone,
        })
    }
}
