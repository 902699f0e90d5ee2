//! Per-year travel reconciliation: filter, correct, dedupe, attach flags.
//!
//! Input is the travel log as emitted by the source (newest first). Output is one
//! [`CountryVisit`] per country, oldest to newest.

use crate::domain::selection::{Direction, dedupe_by_key};
use crate::domain::settings::DigestSettings;
use crate::domain::{CountryVisit, TravelEntry};
use chrono::NaiveDate;

/// Scotland has its own tag-sequence flag; no ISO code maps to it.
pub const SCOTLAND_FLAG: &str = "🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";

/// Used when the flag lookup knows nothing about a code.
pub const FALLBACK_FLAG: &str = "🏳️";

/// Codes some sources emit that the flag table does not know.
const CODE_ALIASES: &[(&str, &str)] = &[("UK", "GB")];

/// Data-quality workaround: a trip the travel log never recorded.
///
/// Kept separate from the reconciler so it can be dropped once the source data
/// is fixed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownMissingTrip {
    pub entry: TravelEntry,
}

/// The hand-specified trips missing from the travel log.
pub fn known_missing_trips() -> Vec<KnownMissingTrip> {
    let (Some(start), Some(end)) = (
        NaiveDate::from_ymd_opt(2023, 8, 10),
        NaiveDate::from_ymd_opt(2023, 8, 14),
    ) else {
        return Vec::new();
    };
    vec![KnownMissingTrip {
        entry: TravelEntry {
            city: "Edinburgh".to_string(),
            country_name: "Scotland".to_string(),
            country_code: "GB".to_string(),
            start_date: start,
            end_date: end,
            year: "2023".to_string(),
            is_transit: false,
        },
    }]
}

pub fn filter_by_year(entries: &[TravelEntry], year: &str) -> Vec<TravelEntry> {
    entries.iter().filter(|e| e.year == year).cloned().collect()
}

/// Drop layovers: stays in an excluded city or flagged as transit by the source.
pub fn remove_transit_trips(
    entries: Vec<TravelEntry>,
    excluded_cities: &[String],
) -> Vec<TravelEntry> {
    entries
        .into_iter()
        .filter(|e| !e.is_transit && !excluded_cities.iter().any(|c| c == &e.city))
        .collect()
}

/// Insert the workaround trips for `year`, keeping the list newest first.
pub fn apply_known_missing_trips(
    mut entries: Vec<TravelEntry>,
    year: &str,
    trips: &[KnownMissingTrip],
) -> Vec<TravelEntry> {
    for trip in trips.iter().filter(|t| t.entry.year == year) {
        let at = entries
            .iter()
            .position(|e| e.start_date < trip.entry.start_date)
            .unwrap_or(entries.len());
        entries.insert(at, trip.entry.clone());
    }
    entries
}

/// One entry per country, oldest first. Assumes newest-first input.
pub fn remove_dupes(entries: Vec<TravelEntry>) -> Vec<TravelEntry> {
    dedupe_by_key(entries, |e| e.country_name.clone(), Direction::Reverse)
}

pub fn fix_country_codes(entries: Vec<TravelEntry>) -> Vec<TravelEntry> {
    entries
        .into_iter()
        .map(|mut e| {
            if let Some((_, canonical)) = CODE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == e.country_code)
            {
                e.country_code = canonical.to_string();
            }
            e
        })
        .collect()
}

fn flag_for_entry<F>(entry: &TravelEntry, flag_for: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if entry.country_name == "Scotland" {
        return SCOTLAND_FLAG.to_string();
    }
    flag_for(&entry.country_code).unwrap_or_else(|| FALLBACK_FLAG.to_string())
}

/// Full pipeline for one calendar year.
pub fn reconcile_travel<F>(
    entries: &[TravelEntry],
    year: &str,
    settings: &DigestSettings,
    flag_for: F,
) -> Vec<CountryVisit>
where
    F: Fn(&str) -> Option<String>,
{
    let entries = filter_by_year(entries, year);
    let entries = remove_transit_trips(entries, &settings.excluded_cities);
    let entries = apply_known_missing_trips(entries, year, &settings.known_missing_trips);
    let entries = remove_dupes(entries);
    fix_country_codes(entries)
        .into_iter()
        .map(|e| CountryVisit {
            flag: flag_for_entry(&e, &flag_for),
            name: e.country_name,
            code: e.country_code,
        })
        .collect()
}
