/// Minimum height of a desktop timeline row, in pixels.
pub const BASE_ROW_HEIGHT: f64 = 140.0;
/// Extra row height per month of tenure.
pub const PX_PER_MONTH: f64 = 2.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: i32,
}

impl YearMonth {
    pub const fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }
}

/// One employer on the experience timeline. Texts live under `work.<id>.*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkEntry {
    pub id: &'static str,
    pub logo: &'static str,
    pub accent: &'static str,
    pub start: YearMonth,
    pub end: YearMonth,
}

/// Newest first.
pub static WORK_ENTRIES: &[WorkEntry] = &[
    WorkEntry {
        id: "treenity",
        logo: "/images/logos/treenity.svg",
        accent: "#7CF072",
        start: YearMonth::new(2023, 2),
        end: YearMonth::new(2026, 1),
    },
    WorkEntry {
        id: "kvarum",
        logo: "/images/logos/kvarum.svg",
        accent: "#a5c341",
        start: YearMonth::new(2021, 6),
        end: YearMonth::new(2023, 1),
    },
    WorkEntry {
        id: "sandvik",
        logo: "/images/logos/sandvik.svg",
        accent: "#ffffff",
        start: YearMonth::new(2009, 7),
        end: YearMonth::new(2021, 5),
    },
];

impl WorkEntry {
    pub fn duration_months(&self) -> u32 {
        let months = (self.end.year - self.start.year) * 12 + (self.end.month - self.start.month);
        months.max(0) as u32
    }

    pub fn text_key(&self, field: &str) -> String {
        format!("work.{}.{field}", self.id)
    }
}

pub fn row_height(months: u32) -> f64 {
    BASE_ROW_HEIGHT + months as f64 * PX_PER_MONTH
}

/// Height of the mobile connector line below an entry.
pub fn connector_height(months: u32) -> u32 {
    (months * 3).max(28)
}

/// Short tenure label such as `2y 11m`, or `12y` on whole years.
pub fn tenure_label(months: u32) -> String {
    let (years, rest) = (months / 12, months % 12);
    if rest > 0 {
        format!("{years}y {rest}m")
    } else {
        format!("{years}y")
    }
}

/// Letter shown when a logo can't be loaded.
pub fn logo_fallback(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translate, Language, LANGUAGES};

    fn entry(id: &str) -> &'static WorkEntry {
        WORK_ENTRIES
            .iter()
            .find(|e| e.id == id)
            .unwrap_or_else(|| panic!("{id} should be listed"))
    }

    #[test]
    fn test_duration_months() {
        assert_eq!(entry("treenity").duration_months(), 35);
        assert_eq!(entry("kvarum").duration_months(), 19);
        assert_eq!(entry("sandvik").duration_months(), 142);
    }

    #[test]
    fn test_reversed_dates_clamp_to_zero() {
        let odd = WorkEntry {
            start: YearMonth::new(2024, 5),
            end: YearMonth::new(2024, 1),
            ..*entry("kvarum")
        };
        assert_eq!(odd.duration_months(), 0);
    }

    #[test]
    fn test_row_height_grows_with_tenure() {
        assert_eq!(row_height(0), 140.0);
        assert_eq!(row_height(10), 164.0);
        assert!(row_height(entry("sandvik").duration_months()) > row_height(entry("kvarum").duration_months()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(tenure_label(35), "2y 11m");
        assert_eq!(tenure_label(24), "2y");
        assert_eq!(tenure_label(5), "0y 5m");
        assert_eq!(connector_height(3), 28);
        assert_eq!(connector_height(19), 57);
        assert_eq!(logo_fallback("sandvik"), "S");
        assert_eq!(logo_fallback(""), "");
    }

    #[test]
    fn test_entries_are_newest_first() {
        assert!(WORK_ENTRIES.windows(2).all(|w| w[0].start > w[1].start));
        assert_eq!(entry("kvarum").text_key("name"), "work.kvarum.name");
    }

    #[test]
    fn test_entry_texts_are_translated() {
        for lang in LANGUAGES {
            for entry in WORK_ENTRIES {
                for field in ["name", "position", "description", "years"] {
                    let key = entry.text_key(field);
                    assert_ne!(translate(lang, &key), key, "{lang} is missing {key}");
                }
            }
        }
        assert_ne!(translate(Language::Ru, "final.title"), "final.title");
    }
}
