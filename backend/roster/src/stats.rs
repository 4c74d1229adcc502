//! Occupancy math for the guest-list view.
//!
//! Pure functions of the listing result, so the view renders numbers it
//! never computes itself. Capacity is an argument everywhere; 100 is only
//! the default for this party.

use crate::Rsvp;

pub const DEFAULT_CAPACITY: u32 = 100;

/// Coloring of the capacity bar: above 90% is critical, above 70% warns,
/// anything else is nominal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Nominal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Occupancy {
    pub total_people: i64,
    pub total_groups: usize,
    pub capacity: u32,
    pub occupancy_percentage: f64,
    pub remaining_spots: i64,
}

impl Occupancy {
    pub fn band(&self) -> Band {
        if self.occupancy_percentage > 90.0 {
            Band::Critical
        } else if self.occupancy_percentage > 70.0 {
            Band::Warning
        } else {
            Band::Nominal
        }
    }
}

pub fn occupancy(guests: &[Rsvp], capacity: u32) -> Occupancy {
    let total_people: i64 = guests.iter().map(|g| i64::from(g.people_count)).sum();
    let total_groups = guests.len();

    // A zero-capacity venue is already full.
    let occupancy_percentage = if capacity == 0 {
        100.0
    } else {
        (total_people as f64 / f64::from(capacity) * 100.0).min(100.0)
    };

    let remaining_spots = (i64::from(capacity) - total_people).max(0);

    Occupancy {
        total_people,
        total_groups,
        capacity,
        occupancy_percentage,
        remaining_spots,
    }
}
