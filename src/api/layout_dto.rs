use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Wire form of one seat as authored in a bus model document.
///
/// An absent `status` means the seat is sellable from day one, so it
/// is read as `available`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeatDto {
    pub id: String,
    pub status: Option<SeatStatusDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SeatStatusDto {
    Available,
    BookedMale,
    BookedFemale,
    Reserved,
    Unavailable,
}

/// One cluster of seat rows, e.g. the back bench or the left columns.
///
/// `seats_rows` holds the populated slots of each row; a row may list
/// fewer seats than `seats_per_row`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SeatGroupDto {
    pub height: i64,
    pub seats_rows: Vec<Vec<SeatDto>>,
    pub seats_per_row: i64,
}

/// Non-seat layout element (door, driver cabin). Carries only the
/// vertical space it occupies in the rendered layout.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DecorationDto {
    pub height: i64,
}

/// A bus model document as stored by the admin tooling.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BusLayoutModelDto {
    pub id: String,
    pub left_top_seat_columns: SeatGroupDto,
    pub left_seat_columns: SeatGroupDto,
    pub right_seat_columns: SeatGroupDto,
    pub back_seats: SeatGroupDto,
    pub door: Option<DecorationDto>,
    pub driver: Option<DecorationDto>,
}

impl BusLayoutModelDto {
    /// The four seat-bearing groups in layout order. Decorations are
    /// not part of this; they carry no seats.
    pub fn seat_groups(&self) -> [&SeatGroupDto; 4] {
        [&self.left_top_seat_columns, &self.left_seat_columns, &self.right_seat_columns, &self.back_seats]
    }

    /// The seat-status dictionary a freshly created bus of this model
    /// starts with: every seat under its authored status.
    pub fn initial_seat_status(&self) -> HashMap<String, SeatStatusDto> {
        let mut statuses = HashMap::new();

        for group in self.seat_groups() {
            for row in &group.seats_rows {
                for seat in row {
                    statuses.insert(seat.id.clone(), seat.status.unwrap_or(SeatStatusDto::Available));
                }
            }
        }

        statuses
    }
}
