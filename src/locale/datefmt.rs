//! Locale-aware date strings for the post's text band.
//!
//! Produces `weekday, dd/MM/yyyy` with the weekday named per locale. Locale
//! name tables are a two-level mapping with explicit fallback: a region
//! subtag (`fr-FR`) falls back to its primary subtag, and anything unknown
//! falls back to an ISO `YYYY-MM-DD` string rather than erroring.

use chrono::{Datelike, NaiveDate};
use tracing::error;

struct LocaleNames {
    /// Weekday names, Monday first, in the locale's own casing convention.
    weekdays: [&'static str; 7],
    /// Whether the formatted string's first letter gets uppercased. French
    /// weekday names are conventionally lowercase, but the post design wants
    /// a capital. A presentation fix-up, not a locale feature.
    capitalize_first: bool,
}

const EN: LocaleNames = LocaleNames {
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    capitalize_first: false,
};

const FR: LocaleNames = LocaleNames {
    weekdays: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    capitalize_first: true,
};

const ES: LocaleNames = LocaleNames {
    weekdays: [
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
        "domingo",
    ],
    capitalize_first: false,
};

const DE: LocaleNames = LocaleNames {
    weekdays: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    capitalize_first: false,
};

fn names_for(locale: &str) -> Option<&'static LocaleNames> {
    let lower = locale.to_ascii_lowercase();
    let primary = lower
        .split(['-', '_'])
        .next()
        .unwrap_or(lower.as_str());
    match primary {
        "en" => Some(&EN),
        "fr" => Some(&FR),
        "es" => Some(&ES),
        "de" => Some(&DE),
        _ => None,
    }
}

/// Format a specific date for `locale`.
///
/// Unknown or unsupported locales fall back to ISO `YYYY-MM-DD` with an
/// error log; this function never fails.
pub fn format_date(date: NaiveDate, locale: &str) -> String {
    let Some(names) = names_for(locale) else {
        error!(locale, "unsupported locale, falling back to ISO date");
        return date.format("%Y-%m-%d").to_string();
    };

    let weekday = names.weekdays[date.weekday().num_days_from_monday() as usize];
    let formatted = format!(
        "{weekday}, {:02}/{:02}/{}",
        date.day(),
        date.month(),
        date.year()
    );
    if names.capitalize_first {
        capitalize_first(&formatted)
    } else {
        formatted
    }
}

/// Format today's date for `locale`.
pub fn format_today(locale: &str) -> String {
    format_date(chrono::Local::now().date_naive(), locale)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/locale/datefmt.rs"]
mod tests;
