//! Work shift and date labels for the form header

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Factory work shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    /// 06:00 - 14:00
    Pagi,
    /// 14:00 - 22:00
    Siang,
    /// 22:00 - 06:00
    Malam,
}

impl Shift {
    /// Determine the shift from the hour of day (0-23)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=13 => Shift::Pagi,
            14..=21 => Shift::Siang,
            _ => Shift::Malam,
        }
    }

    /// Label as written on the form
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Pagi => "1 Pagi",
            Shift::Siang => "2 Siang",
            Shift::Malam => "3 Malam",
        }
    }
}

/// Indonesian day names, Sunday first
const HARI: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

/// Format a date the way the HARI/TANGGAL line expects: "Senin 05/08/2026"
pub fn format_tanggal(date: NaiveDate) -> String {
    let hari = HARI[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{} {:02}/{:02}/{}",
        hari,
        date.day(),
        date.month(),
        date.year()
    )
}
