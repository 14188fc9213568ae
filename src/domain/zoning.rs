//! Gender-zoning seat eligibility.
//!
//! A bus seats both genders under a zoning policy. The back bench is
//! the male overflow zone and the front-left columns the female zone,
//! while the two shared column groups in the middle are claimed
//! row-by-row: males expand from the back forwards, females from the
//! front backwards, and each expansion stops at the first row already
//! holding a passenger of the opposite gender.

use crate::domain::id::SeatId;
use crate::domain::layout::{BusLayoutModel, SeatGroup, SeatGroupKind, SeatRow};
use crate::domain::seat::{Gender, SeatStatus};
use crate::domain::seat_map::SeatStatusMap;

/// How many shared rows per group a gender's zone may expand into
/// when nothing blocks it.
pub const DEFAULT_MAX_ROW_INCLUDED: u32 = 2;

/// Direction a shared group's rows are scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanDirection {
    /// Row 0 first. The female expansion direction.
    FrontToBack,
    /// Last row first. The male expansion direction.
    BackToFront,
}

/// Computes the ordered list of seats offerable to a new passenger of
/// `gender`, given the bus's current seat states.
///
/// The result lists the gender's unconditional home zone first (back
/// bench for males, front-left columns for females, row-major), then
/// the eligible seats of the left and the right shared group in scan
/// order.
///
/// The computation is pure: it reads the snapshot and the layout,
/// mutates neither, and identical inputs always yield the identical
/// ordered result. It never fails on a validated layout; seat ids the
/// snapshot knows but the layout does not are simply never visited.
pub fn eligible_seats(
    gender: Gender,
    seat_status: &SeatStatusMap,
    layout: &BusLayoutModel,
    max_row_included: u32,
) -> Vec<SeatId> {
    let mut eligible: Vec<SeatId> = Vec::new();

    let (home_zone, direction) = match gender {
        Gender::Male => (SeatGroupKind::BackSeats, ScanDirection::BackToFront),
        Gender::Female => (SeatGroupKind::LeftTopSeatColumns, ScanDirection::FrontToBack),
    };

    collect_zone_seats(layout.group(home_zone), seat_status, &mut eligible);
    let home_zone_len = eligible.len();

    for shared in [SeatGroupKind::LeftSeatColumns, SeatGroupKind::RightSeatColumns] {
        scan_shared_group(layout.group(shared), gender, direction, seat_status, max_row_included, &mut eligible);
    }

    log::debug!(
        "Zoning scan for a {} passenger on model '{}': {} home-zone seats, {} shared-row seats.",
        gender,
        layout.id,
        home_zone_len,
        eligible.len() - home_zone_len
    );

    eligible
}

/// Collects every available seat of a gender's home zone in row-major
/// order. The home zone is not subject to the row budget.
fn collect_zone_seats(group: &SeatGroup, seat_status: &SeatStatusMap, eligible: &mut Vec<SeatId>) {
    for seat in group.iter_seats() {
        if seat_status.status_of(&seat.id) == SeatStatus::Available {
            eligible.push(seat.id.clone());
        }
    }
}

/// Scans a shared group's rows in the gender's expansion direction,
/// collecting available seats until the row budget is spent or a row
/// booked by the opposite gender is reached.
///
/// A boundary row contributes nothing, not even its own available
/// seats. Reserved and unavailable seats are never collected but do
/// not block the scan. Only rows that contributed at least one seat
/// count toward `max_row_included`.
fn scan_shared_group(
    group: &SeatGroup,
    gender: Gender,
    direction: ScanDirection,
    seat_status: &SeatStatusMap,
    max_row_included: u32,
    eligible: &mut Vec<SeatId>,
) {
    if max_row_included == 0 {
        return;
    }

    let boundary = gender.boundary_status();
    let mut rows_included: u32 = 0;

    let rows: Box<dyn Iterator<Item = &SeatRow>> = match direction {
        ScanDirection::FrontToBack => Box::new(group.rows.iter()),
        ScanDirection::BackToFront => Box::new(group.rows.iter().rev()),
    };

    for row in rows {
        // The first row holding an opposite-gender passenger is the
        // other zone's frontier. It and everything beyond it stay
        // untouched, including its own still-available seats.
        if row.seats.iter().any(|seat| seat_status.status_of(&seat.id) == boundary) {
            break;
        }

        let before = eligible.len();
        for seat in &row.seats {
            if seat_status.status_of(&seat.id) == SeatStatus::Available {
                eligible.push(seat.id.clone());
            }
        }

        if eligible.len() > before {
            rows_included += 1;
            if rows_included >= max_row_included {
                break;
            }
        }
    }
}
