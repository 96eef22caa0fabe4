//! Chronological ordering of event records.
//!
//! The `date` field is whatever the poster (or the user) said: "15 Marzo
//! 2026", "Sabato 1° marzo", "15/03", "domani"... We turn it into a
//! `SortKey`. Dates without a year resolve to their next occurrence from
//! today. Anything we cannot read sorts last, exactly like an empty date.

use crate::core::lexicon;
use crate::models::event_record::EventRecord;
use chrono::{Datelike, Duration, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// `15/03/2026`, `15.03.26`, `15-3`, ...
static NUMERIC_DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s*([/.\-])\s*(\d{1,2})(?:\s*[/.\-]\s*(\d{4}|\d{2}))?$")
        .expect("valid numeric date regex")
});

/// `2026-03-15`
static ISO_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid ISO date regex")
});

/// How far ahead we look for a valid year-less date (29 February).
const MAX_YEARS_AHEAD: i32 = 8;

/// Ordering key of a record. `Dated` always sorts before `Undated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Dated(NaiveDate),
    /// Empty or unreadable date: the latest possible instant.
    Undated,
}

impl SortKey {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            SortKey::Dated(d) => Some(*d),
            SortKey::Undated => None,
        }
    }
}

/// Sort key relative to the local current date.
pub fn sort_key(record: &EventRecord) -> SortKey {
    sort_key_at(record, Local::now().date_naive())
}

/// Sort key with an explicit "today", used to resolve year-less dates.
pub fn sort_key_at(record: &EventRecord, today: NaiveDate) -> SortKey {
    match parse_italian_date(&record.date, today) {
        Some(d) => SortKey::Dated(d),
        None => SortKey::Undated,
    }
}

/// Stable in-place chronological sort.
pub fn sort_events(events: &mut [EventRecord]) {
    let today = Local::now().date_naive();
    sort_events_at(events, today);
}

pub fn sort_events_at(events: &mut [EventRecord], today: NaiveDate) {
    // sort_by_cached_key is stable and parses each date once.
    events.sort_by_cached_key(|e| sort_key_at(e, today));
}

/// Original positions of `events`, in chronological order.
pub fn sorted_indices(events: &[EventRecord], today: NaiveDate) -> Vec<usize> {
    let mut idx: Vec<(SortKey, usize)> = events
        .iter()
        .enumerate()
        .map(|(i, e)| (sort_key_at(e, today), i))
        .collect();
    idx.sort();
    idx.into_iter().map(|(_, i)| i).collect()
}

/// Parse a free-form Italian date.
///
/// Returns `None` for empty input and for anything that is not entirely made
/// of date tokens.
pub fn parse_italian_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_YMD.captures(text) {
        let y = caps[1].parse().ok()?;
        let m = caps[2].parse().ok()?;
        let d = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }

    if let Some(caps) = NUMERIC_DMY.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[3].parse().ok()?;
        return match caps.get(4) {
            Some(y) => {
                let year = expand_year(y.as_str())?;
                NaiveDate::from_ymd_opt(year, month, day)
            }
            None => next_occurrence(day, month, today),
        };
    }

    parse_words(text, today)
}

/// `26` → 2026, `2026` → 2026.
fn expand_year(s: &str) -> Option<i32> {
    let y: i32 = s.parse().ok()?;
    match s.len() {
        2 => Some(2000 + y),
        4 => Some(y),
        _ => None,
    }
}

/// First `day/month` on or after `today`.
fn next_occurrence(day: u32, month: u32, today: NaiveDate) -> Option<NaiveDate> {
    (0..=MAX_YEARS_AHEAD)
        .filter_map(|ahead| NaiveDate::from_ymd_opt(today.year() + ahead, month, day))
        .find(|d| *d >= today)
}

#[derive(Debug, Default)]
struct Parts {
    weekday: Option<chrono::Weekday>,
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    offset: Option<i64>,
}

/// Textual forms: "Sabato 15 Marzo 2026", "1° marzo", "primo aprile",
/// "15 mar.", "domenica", "domani".
fn parse_words(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let mut parts = Parts::default();

    let tokens = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    for raw in tokens {
        let token = raw.trim_end_matches(['°', 'º']);

        if lexicon::is_filler(token) {
            continue;
        }

        if let Some(offset) = lexicon::relative_day(token) {
            set_once(&mut parts.offset, offset)?;
            continue;
        }

        if let Some(month) = lexicon::month_number(token) {
            set_once(&mut parts.month, month)?;
            continue;
        }

        if let Some(wd) = lexicon::weekday(token) {
            set_once(&mut parts.weekday, wd)?;
            continue;
        }

        if lexicon::fold(token) == "primo" {
            set_once(&mut parts.day, 1)?;
            continue;
        }

        if token.chars().all(|c| c.is_ascii_digit()) {
            match token.len() {
                1 | 2 => {
                    let day: u32 = token.parse().ok()?;
                    if !(1..=31).contains(&day) {
                        return None;
                    }
                    set_once(&mut parts.day, day)?;
                }
                4 => set_once(&mut parts.year, token.parse().ok()?)?,
                _ => return None,
            }
            continue;
        }

        // unknown word: not a date
        return None;
    }

    resolve(parts, today)
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Option<()> {
    if slot.is_some() {
        return None;
    }
    *slot = Some(value);
    Some(())
}

fn resolve(p: Parts, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(offset) = p.offset {
        // "domani" only makes sense alone
        if p.day.is_some() || p.month.is_some() || p.year.is_some() {
            return None;
        }
        return today.checked_add_signed(Duration::days(offset));
    }

    match (p.day, p.month, p.year) {
        (Some(d), Some(m), Some(y)) => NaiveDate::from_ymd_opt(y, m, d),
        (Some(d), Some(m), None) => next_occurrence(d, m, today),
        (None, Some(m), Some(y)) => NaiveDate::from_ymd_opt(y, m, 1),
        (None, Some(m), None) => {
            let this_year = NaiveDate::from_ymd_opt(today.year(), m, 1)?;
            if this_year.month() >= today.month() {
                Some(this_year)
            } else {
                NaiveDate::from_ymd_opt(today.year() + 1, m, 1)
            }
        }
        (Some(d), None, None) => {
            // "Sabato 15": this month if still ahead, otherwise the next
            // month that has such a day.
            let mut cursor = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?;
            for _ in 0..=12 {
                if let Some(date) = NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), d)
                    && date >= today
                {
                    return Some(date);
                }
                cursor = first_of_next_month(cursor)?;
            }
            None
        }
        (None, None, None) => {
            let wd = p.weekday?;
            let ahead = (7 + wd.num_days_from_monday() as i64
                - today.weekday().num_days_from_monday() as i64)
                % 7;
            today.checked_add_signed(Duration::days(ahead))
        }
        // a year alone, or day + year without a month
        _ => None,
    }
}

fn first_of_next_month(d: NaiveDate) -> Option<NaiveDate> {
    if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)
    }
}
