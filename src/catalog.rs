//! Bookable services, stylists, time slots and the date-availability rule.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::Serialize;

/// How many days ahead a booking can be placed.
pub const BOOKING_WINDOW_DAYS: i64 = 30;

/// The salon takes no bookings on this weekday.
pub const CLOSED_WEEKDAY: Weekday = Weekday::Sun;

/// Number of dates offered in the date picker.
pub const DATE_PICKER_LIMIT: usize = 12;

pub const ANY_STYLIST: &str = "any";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stylist {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "taglio",
        name: "Taglio & Style",
        duration: "60 min",
        price: "€45",
    },
    Service {
        id: "colore",
        name: "Colore & Trattamenti",
        duration: "120 min",
        price: "€85",
    },
    Service {
        id: "balayage",
        name: "Balayage/Meches",
        duration: "180 min",
        price: "€120",
    },
    Service {
        id: "spa",
        name: "Hair Spa Completo",
        duration: "90 min",
        price: "€65",
    },
    Service {
        id: "piega",
        name: "Piega & Styling",
        duration: "45 min",
        price: "€35",
    },
    Service {
        id: "trattamento",
        name: "Trattamento Riparatore",
        duration: "75 min",
        price: "€55",
    },
];

pub const STYLISTS: &[Stylist] = &[
    Stylist {
        id: "sara",
        name: "Sara Lepri",
        specialty: "Colorista & Founder",
    },
    Stylist {
        id: "marco",
        name: "Marco Bianchi",
        specialty: "Hair Stylist Senior",
    },
    Stylist {
        id: ANY_STYLIST,
        name: "Primo Disponibile",
        specialty: "Qualsiasi specialista",
    },
];

/// Morning window 09:00-11:30, afternoon window 14:00-18:30.
pub const TIME_SLOTS: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00", "17:30", "18:00", "18:30",
];

const WEEKDAYS_SHORT: [&str; 7] = ["lun", "mar", "mer", "gio", "ven", "sab", "dom"];

const MONTHS_SHORT: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

pub fn find_stylist(id: &str) -> Option<&'static Stylist> {
    STYLISTS.iter().find(|stylist| stylist.id == id)
}

pub fn is_time_slot(value: &str) -> bool {
    TIME_SLOTS.contains(&value)
}

/// Short it-IT label, e.g. `mar 20 ott`.
pub fn date_label(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_SHORT[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_SHORT[date.month0() as usize];
    format!("{weekday} {} {month}", date.day())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableDate {
    pub date: NaiveDate,
    pub value: String,
    pub label: String,
}

impl AvailableDate {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            value: date.format("%Y-%m-%d").to_string(),
            label: date_label(date),
        }
    }
}

/// Bookable days after `today`: the next 30 days, closed weekday excluded.
pub fn available_dates(today: NaiveDate) -> Vec<AvailableDate> {
    (1..=BOOKING_WINDOW_DAYS)
        .map(|offset| today + Duration::days(offset))
        .filter(|date| date.weekday() != CLOSED_WEEKDAY)
        .map(AvailableDate::new)
        .collect()
}

/// Catalog snapshot for a given day. Dates depend on "today"; the rest is static.
#[derive(Debug, Clone)]
pub struct Catalog {
    dates: Vec<AvailableDate>,
}

impl Catalog {
    pub fn for_day(today: NaiveDate) -> Self {
        Self {
            dates: available_dates(today),
        }
    }

    pub fn today() -> Self {
        Self::for_day(Local::now().date_naive())
    }

    pub fn services(&self) -> &'static [Service] {
        SERVICES
    }

    pub fn stylists(&self) -> &'static [Stylist] {
        STYLISTS
    }

    pub fn time_slots(&self) -> &'static [&'static str] {
        TIME_SLOTS
    }

    pub fn picker_dates(&self) -> &[AvailableDate] {
        let end = self.dates.len().min(DATE_PICKER_LIMIT);
        &self.dates[..end]
    }

    pub fn find_date(&self, value: &str) -> Option<&AvailableDate> {
        self.dates.iter().find(|date| date.value == value)
    }
}
