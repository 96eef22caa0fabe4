//! Field extraction from poster OCR text.
//!
//! The OCR engine hands us one string with a line per visual block, read top
//! to bottom. The cascade below relies on that layout:
//!
//! 1. first line: `date – location`
//! 2. following lines, joined: `description ore HH:MM – venue`
//! 3. whole text: first street address (`Via Roma 12`)
//! 4. title derived from the description
//!
//! Every rule scans its own slice of the input independently; no rule removes
//! text that another rule could see. A rule without a match leaves its
//! field empty. Nothing here can fail.

use crate::models::event_record::EventRecord;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Placeholder title when nothing better is available.
pub const PLACEHOLDER_TITLE: &str = "Nuovo Evento";

/// Year appended to year-less dates on the first line.
pub const DEFAULT_YEAR: i32 = 2026;

/// Maximum title length (in characters) when derived from the description.
pub const TITLE_MAX_CHARS: usize = 50;

/// ` – ` or ` - ` between the date and the location.
static HEADER_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[–-]\s+").expect("valid header separator regex"));

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

/// `ore 20:30`, `Ore 9.30`, `ORE 21,00`.
static TIME_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bore\s*(\d{1,2})[:.,](\d{2})\b").expect("valid time anchor regex")
});

/// Street keyword, an optional lowercase preposition ("della", "dei",
/// "dell'"), a capitalized word, then anything up to the first number, all on
/// one line.
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:via|vico|piazza|corso|largo|strada)[ \t]+(?:(?:d[aie]ll?[aeoi]|de[il]|degli|d[ae]|di)[ \t]+|d[aie]ll['’][ \t]*)?\p{Lu}[\p{L}'’.]*.*?\d+",
    )
    .expect("valid address regex")
});

/// Tunables of the extraction cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub default_year: i32,
    pub placeholder_title: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            default_year: DEFAULT_YEAR,
            placeholder_title: PLACEHOLDER_TITLE.to_string(),
        }
    }
}

/// Stateless extractor. Cheap to build, safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    opts: ExtractOptions,
}

impl Extractor {
    pub fn new(opts: ExtractOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.opts
    }

    /// Turn raw OCR text into an event record.
    pub fn extract(&self, raw_text: &str) -> EventRecord {
        let mut rec = EventRecord::default();

        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if let Some((first, rest)) = lines.split_first() {
            let (date, location) = split_header(first, self.opts.default_year);
            rec.date = date;
            rec.location = location;

            if !rest.is_empty() {
                let span = rest.join(" ");
                let tail = split_tail(&span);
                rec.time = tail.time;
                rec.description = tail.description;
                rec.venue = tail.venue;
            }
        }

        rec.address = find_address(raw_text).unwrap_or_default();

        apply_default_title(&mut rec, &self.opts.placeholder_title);

        debug!(
            date = %rec.date,
            time = %rec.time,
            location = %rec.location,
            venue = %rec.venue,
            address = %rec.address,
            "poster text extracted"
        );

        rec
    }
}

/// Extract with the default options.
pub fn extract(raw_text: &str) -> EventRecord {
    Extractor::default().extract(raw_text)
}

/// Split the first line into (date, location).
///
/// A date without a four digit year gets `default_year` appended, unless it
/// is too short (<= 3 chars) to plausibly be a date.
pub fn split_header(line: &str, default_year: i32) -> (String, String) {
    let mut parts = HEADER_SEPARATOR.splitn(line, 2);
    let raw_date = parts.next().unwrap_or_default().trim();
    let location = parts.next().unwrap_or_default().trim();

    let mut date = raw_date.to_string();
    if !date.is_empty() && !FOUR_DIGITS.is_match(&date) && date.chars().count() > 3 {
        date = format!("{} {}", date, default_year);
    }

    (date, location.to_string())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TailFields {
    pub time: String,
    pub description: String,
    pub venue: String,
}

/// Split the body span around the first valid `ore H:MM` anchor.
pub fn split_tail(span: &str) -> TailFields {
    let anchor = TIME_ANCHOR.captures_iter(span).find_map(|caps| {
        let whole = caps.get(0)?;
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        (hour < 24 && minute < 60).then_some((whole.start(), whole.end(), hour, minute))
    });

    match anchor {
        Some((start, end, hour, minute)) => {
            let description = span[..start]
                .trim()
                .trim_end_matches(is_dash_or_space)
                .to_string();

            let after = span[end..].trim();
            let after = after
                .strip_prefix('–')
                .or_else(|| after.strip_prefix('-'))
                .unwrap_or(after);

            TailFields {
                time: format!("{:02}:{:02}", hour, minute),
                description,
                venue: after.trim().to_string(),
            }
        }
        None => TailFields {
            description: span.trim().to_string(),
            ..Default::default()
        },
    }
}

fn is_dash_or_space(c: char) -> bool {
    c == ' ' || c == '-' || c == '–'
}

/// First street address in `text`, if any.
pub fn find_address(text: &str) -> Option<String> {
    ADDRESS.find(text).map(|m| m.as_str().trim().to_string())
}

/// First `TITLE_MAX_CHARS` characters of the description followed by `...`,
/// whatever its length.
pub fn title_from_description(description: &str) -> Option<String> {
    let description = description.trim();
    if description.is_empty() {
        return None;
    }

    let cut: String = description.chars().take(TITLE_MAX_CHARS).collect();
    Some(format!("{}...", cut))
}

/// Fill an empty title from the description, or with the placeholder.
pub fn apply_default_title(rec: &mut EventRecord, placeholder: &str) {
    if !rec.title.trim().is_empty() {
        return;
    }

    rec.title = title_from_description(&rec.description).unwrap_or_else(|| placeholder.to_string());
}
