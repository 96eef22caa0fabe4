//! Italian date vocabulary: month names, weekday names and relative-day words.
//!
//! Everything date-related that depends on the language lives in these
//! tables, the parsers only see the lookups below. Keys are lowercase and
//! accent-folded (see [`fold`]).

use chrono::Weekday;

/// Month names and abbreviations → month number (1-12).
pub const MONTHS: &[(&str, u32)] = &[
    ("gennaio", 1),
    ("gen", 1),
    ("febbraio", 2),
    ("feb", 2),
    ("marzo", 3),
    ("mar", 3),
    ("aprile", 4),
    ("apr", 4),
    ("maggio", 5),
    ("mag", 5),
    ("giugno", 6),
    ("giu", 6),
    ("luglio", 7),
    ("lug", 7),
    ("agosto", 8),
    ("ago", 8),
    ("settembre", 9),
    ("set", 9),
    ("sett", 9),
    ("ottobre", 10),
    ("ott", 10),
    ("novembre", 11),
    ("nov", 11),
    ("dicembre", 12),
    ("dic", 12),
];

/// Weekday names and abbreviations.
///
/// "mar" is deliberately missing: it always means March (marzo).
pub const WEEKDAYS: &[(&str, Weekday)] = &[
    ("lunedi", Weekday::Mon),
    ("lun", Weekday::Mon),
    ("martedi", Weekday::Tue),
    ("mercoledi", Weekday::Wed),
    ("mer", Weekday::Wed),
    ("giovedi", Weekday::Thu),
    ("gio", Weekday::Thu),
    ("venerdi", Weekday::Fri),
    ("ven", Weekday::Fri),
    ("sabato", Weekday::Sat),
    ("sab", Weekday::Sat),
    ("domenica", Weekday::Sun),
    ("dom", Weekday::Sun),
];

/// Relative-day words → offset in days from today.
pub const RELATIVE_DAYS: &[(&str, i64)] = &[("oggi", 0), ("domani", 1), ("dopodomani", 2)];

/// Words that may appear inside a date without carrying information
/// ("il 3 di marzo").
pub const FILLER_WORDS: &[&str] = &["il", "di", "del", "de"];

/// Full month names, indexed by month number - 1. Used for display.
const MONTH_NAMES: [&str; 12] = [
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
    "Ottobre",
    "Novembre",
    "Dicembre",
];

/// Lowercase a token and strip Italian accents (`lunedì` → `lunedi`).
pub fn fold(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'á' => 'a',
            'è' | 'é' => 'e',
            'ì' | 'í' => 'i',
            'ò' | 'ó' => 'o',
            'ù' | 'ú' => 'u',
            other => other,
        })
        .collect()
}

pub fn month_number(token: &str) -> Option<u32> {
    let key = fold(token);
    let key = key.trim_end_matches('.');
    MONTHS.iter().find(|(name, _)| *name == key).map(|(_, n)| *n)
}

pub fn weekday(token: &str) -> Option<Weekday> {
    let key = fold(token);
    let key = key.trim_end_matches('.');
    WEEKDAYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, w)| *w)
}

pub fn relative_day(token: &str) -> Option<i64> {
    let key = fold(token);
    RELATIVE_DAYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, offset)| *offset)
}

pub fn is_filler(token: &str) -> bool {
    let key = fold(token);
    FILLER_WORDS.contains(&key.as_str())
}

/// Italian name of a month (1-12). Out of range → "".
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

