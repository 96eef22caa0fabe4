use crate::errors::AppError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The user-editable text fields of an `EventRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventField {
    Title,
    Date,
    Time,
    Location,
    Venue,
    Address,
    Description,
}

impl EventField {
    pub const ALL: [EventField; 7] = [
        EventField::Title,
        EventField::Date,
        EventField::Time,
        EventField::Location,
        EventField::Venue,
        EventField::Address,
        EventField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventField::Title => "title",
            EventField::Date => "date",
            EventField::Time => "time",
            EventField::Location => "location",
            EventField::Venue => "venue",
            EventField::Address => "address",
            EventField::Description => "description",
        }
    }

    /// Italian label, as shown next to the values in the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            EventField::Title => "Titolo",
            EventField::Date => "Data",
            EventField::Time => "Orario",
            EventField::Location => "Luogo",
            EventField::Venue => "Presso",
            EventField::Address => "Indirizzo",
            EventField::Description => "Descrizione",
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        EventField::ALL
            .into_iter()
            .find(|f| f.as_str() == needle || f.label().to_lowercase() == needle)
            .ok_or_else(|| AppError::InvalidField(s.to_string()))
    }
}
