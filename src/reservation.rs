//! Reservation form options and the values a visitor can pick.
//!
//! The form has no submit action. This module only defines what the time and
//! party-size selects offer and how a raw select value maps back to it.

use serde::Serialize;
use std::fmt;

/// Opening block a time slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Lunch,
    Dinner,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Lunch, Service::Dinner];

    /// Label of the `<optgroup>`.
    pub fn label(self) -> &'static str {
        match self {
            Service::Lunch => "Comida",
            Service::Dinner => "Cena",
        }
    }

    fn first_hour(self) -> u8 {
        match self {
            Service::Lunch => 12,
            Service::Dinner => 20,
        }
    }

    fn slot_count(self) -> usize {
        match self {
            Service::Lunch => 17,
            Service::Dinner => 15,
        }
    }

    /// Bookable times in 15-minute steps: 12:00..=16:00 for lunch and
    /// 20:00..=23:30 for dinner.
    pub fn slots(self) -> Vec<TimeSlot> {
        (0..self.slot_count())
            .map(|i| TimeSlot {
                hour: self.first_hour() + (i / 4) as u8,
                minute: (i % 4) as u8 * 15,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeSlot {
    pub hour: u8,
    pub minute: u8,
}

impl TimeSlot {
    /// Parse an `HH:MM` select value. Only offered slots are accepted.
    pub fn parse(value: &str) -> Option<(Service, TimeSlot)> {
        let (h, m) = value.split_once(':')?;
        if h.len() != 2 || m.len() != 2 {
            return None;
        }
        let slot = TimeSlot {
            hour: h.parse().ok()?,
            minute: m.parse().ok()?,
        };
        Service::ALL
            .into_iter()
            .find(|s| s.slots().contains(&slot))
            .map(|s| (s, slot))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Party-size buckets offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartySize {
    One,
    Two,
    ThreeToFour,
    FiveToSix,
    SevenPlus,
}

/// Value of the unselected placeholder option in both selects.
pub const PLACEHOLDER_VALUE: &str = "";

impl PartySize {
    pub const ALL: [PartySize; 5] = [
        PartySize::One,
        PartySize::Two,
        PartySize::ThreeToFour,
        PartySize::FiveToSix,
        PartySize::SevenPlus,
    ];

    pub fn value(self) -> &'static str {
        match self {
            PartySize::One => "1",
            PartySize::Two => "2",
            PartySize::ThreeToFour => "3-4",
            PartySize::FiveToSix => "5-6",
            PartySize::SevenPlus => "7+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PartySize::One => "1 Persona",
            PartySize::Two => "2 Personas",
            PartySize::ThreeToFour => "3-4 Personas",
            PartySize::FiveToSix => "5-6 Personas",
            PartySize::SevenPlus => "7+ Personas",
        }
    }

    pub fn from_value(value: &str) -> Option<PartySize> {
        PartySize::ALL.into_iter().find(|p| p.value() == value)
    }
}

/// What the visitor has typed and picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: Option<TimeSlot>,
    pub party: Option<PartySize>,
    pub message: String,
}

impl ReservationForm {
    /// Apply a time select value. Unknown values clear the selection.
    pub fn select_time(&mut self, value: &str) -> bool {
        self.time = TimeSlot::parse(value).map(|(_, slot)| slot);
        self.time.is_some()
    }

    /// Apply a party-size select value. Unknown values clear the selection.
    pub fn select_party(&mut self, value: &str) -> bool {
        self.party = PartySize::from_value(value);
        self.party.is_some()
    }

    /// Current party-size select value; the placeholder when unset.
    pub fn party_value(&self) -> &'static str {
        self.party.map_or(PLACEHOLDER_VALUE, PartySize::value)
    }

    /// Current time select value; empty when unset.
    pub fn time_value(&self) -> String {
        self.time.map(|t| t.to_string()).unwrap_or_default()
    }
}
