use std::fmt;

use crate::domain::layout::{BusLayoutModel, SeatGroupKind};
use crate::domain::seat::SeatStatus;
use crate::domain::seat_map::SeatStatusMap;

/// Seat-state counts for one seat group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupOccupancy {
    pub total: usize,
    pub available: usize,
    pub booked_male: usize,
    pub booked_female: usize,
    pub reserved: usize,
    pub unavailable: usize,
}

impl GroupOccupancy {
    pub fn booked(&self) -> usize {
        self.booked_male + self.booked_female
    }

    fn record(&mut self, status: SeatStatus) {
        self.total += 1;
        match status {
            SeatStatus::Available => self.available += 1,
            SeatStatus::BookedMale => self.booked_male += 1,
            SeatStatus::BookedFemale => self.booked_female += 1,
            SeatStatus::Reserved => self.reserved += 1,
            SeatStatus::Unavailable => self.unavailable += 1,
        }
    }

    fn absorb(&mut self, other: &GroupOccupancy) {
        self.total += other.total;
        self.available += other.available;
        self.booked_male += other.booked_male;
        self.booked_female += other.booked_female;
        self.reserved += other.reserved;
        self.unavailable += other.unavailable;
    }
}

/// Occupancy of a whole bus, as shown in the administrator's
/// passenger overview.
#[derive(Debug, Clone)]
pub struct OccupancyReport {
    pub groups: [(SeatGroupKind, GroupOccupancy); 4],
    pub totals: GroupOccupancy,
}

impl OccupancyReport {
    /// Share of sellable seats currently booked. Reserved and
    /// unavailable seats are not sellable and excluded from the base.
    pub fn occupancy_ratio(&self) -> f64 {
        let sellable = self.totals.available + self.totals.booked();

        if sellable == 0 {
            return 0.0;
        }

        self.totals.booked() as f64 / sellable as f64
    }
}

/// Counts the current seat states of `layout` under `seat_status`,
/// per group and for the whole bus.
pub fn occupancy_report(seat_status: &SeatStatusMap, layout: &BusLayoutModel) -> OccupancyReport {
    let mut groups = SeatGroupKind::ALL.map(|kind| (kind, GroupOccupancy::default()));
    let mut totals = GroupOccupancy::default();

    for (kind, counts) in groups.iter_mut() {
        for seat in layout.group(*kind).iter_seats() {
            counts.record(seat_status.status_of(&seat.id));
        }
        totals.absorb(counts);
    }

    OccupancyReport { groups, totals }
}

impl fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<22} {:>5} {:>9} {:>6} {:>8} {:>8} {:>11}",
            "group", "seats", "available", "male", "female", "reserved", "unavailable"
        )?;

        for (kind, counts) in &self.groups {
            writeln!(
                f,
                "{:<22} {:>5} {:>9} {:>6} {:>8} {:>8} {:>11}",
                kind.to_string(),
                counts.total,
                counts.available,
                counts.booked_male,
                counts.booked_female,
                counts.reserved,
                counts.unavailable
            )?;
        }

        write!(f, "total: {} seats, {:.0}% of sellable seats booked", self.totals.total, self.occupancy_ratio() * 100.0)
    }
}
