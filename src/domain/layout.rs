use std::collections::HashSet;
use std::fmt;

use crate::api::layout_dto::{BusLayoutModelDto, SeatGroupDto};
use crate::domain::id::{BusModelId, SeatId};
use crate::domain::seat::Seat;
use crate::error::{Error, Result};

/// One physical row of a seat group. A row may hold fewer seats than
/// the group's nominal width; missing slots simply do not exist.
#[derive(Debug, Clone, Default)]
pub struct SeatRow {
    pub seats: Vec<Seat>,
}

/// A named cluster of seat rows (left columns, back bench, ...).
#[derive(Debug, Clone)]
pub struct SeatGroup {
    /// Vertical space the group occupies in the rendered layout.
    /// Irrelevant to seat allocation.
    pub height: i64,
    pub rows: Vec<SeatRow>,
    pub seats_per_row: usize,
}

impl SeatGroup {
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|row| row.seats.len()).sum()
    }

    /// Row-major iteration: row 0 left to right, then row 1, and so on.
    pub fn iter_seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(|row| row.seats.iter())
    }

    fn try_from_dto(dto: &SeatGroupDto, kind: SeatGroupKind) -> Result<Self> {
        if dto.seats_per_row <= 0 {
            return Err(Error::MalformedLayout(format!(
                "group '{}' declares a non-positive seatsPerRow of {}",
                kind, dto.seats_per_row
            )));
        }

        let seats_per_row = dto.seats_per_row as usize;
        let mut rows = Vec::with_capacity(dto.seats_rows.len());

        for (row_index, row_dto) in dto.seats_rows.iter().enumerate() {
            if row_dto.len() > seats_per_row {
                return Err(Error::MalformedLayout(format!(
                    "group '{}' row {} holds {} seats but the group is {} seats wide",
                    kind,
                    row_index,
                    row_dto.len(),
                    seats_per_row
                )));
            }

            rows.push(SeatRow { seats: row_dto.iter().map(Seat::from).collect() });
        }

        Ok(SeatGroup { height: dto.height, rows, seats_per_row })
    }
}

/// The four seat-bearing groups of a bus model, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatGroupKind {
    LeftTopSeatColumns,
    LeftSeatColumns,
    RightSeatColumns,
    BackSeats,
}

impl SeatGroupKind {
    pub const ALL: [SeatGroupKind; 4] = [
        SeatGroupKind::LeftTopSeatColumns,
        SeatGroupKind::LeftSeatColumns,
        SeatGroupKind::RightSeatColumns,
        SeatGroupKind::BackSeats,
    ];
}

impl fmt::Display for SeatGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeatGroupKind::LeftTopSeatColumns => "leftTopSeatColumns",
            SeatGroupKind::LeftSeatColumns => "leftSeatColumns",
            SeatGroupKind::RightSeatColumns => "rightSeatColumns",
            SeatGroupKind::BackSeats => "backSeats",
        };
        write!(f, "{}", name)
    }
}

/// Validated seat layout of one bus model.
///
/// A value of this type has passed structural validation: positive
/// row widths, no row wider than its group declares, and globally
/// unique seat ids. The zoning engine relies on this and performs no
/// checks of its own. Construction goes through
/// [`TryFrom<&BusLayoutModelDto>`].
#[derive(Debug, Clone)]
pub struct BusLayoutModel {
    pub id: BusModelId,
    pub left_top_seat_columns: SeatGroup,
    pub left_seat_columns: SeatGroup,
    pub right_seat_columns: SeatGroup,
    pub back_seats: SeatGroup,
}

impl BusLayoutModel {
    pub fn group(&self, kind: SeatGroupKind) -> &SeatGroup {
        match kind {
            SeatGroupKind::LeftTopSeatColumns => &self.left_top_seat_columns,
            SeatGroupKind::LeftSeatColumns => &self.left_seat_columns,
            SeatGroupKind::RightSeatColumns => &self.right_seat_columns,
            SeatGroupKind::BackSeats => &self.back_seats,
        }
    }

    pub fn seat_count(&self) -> usize {
        SeatGroupKind::ALL.iter().map(|kind| self.group(*kind).seat_count()).sum()
    }

    /// All seats of the model, group by group in layout order, each
    /// group row-major.
    pub fn iter_seats(&self) -> impl Iterator<Item = &Seat> {
        SeatGroupKind::ALL.into_iter().flat_map(move |kind| self.group(kind).iter_seats())
    }

    pub fn contains_seat(&self, id: &SeatId) -> bool {
        self.iter_seats().any(|seat| &seat.id == id)
    }
}

impl TryFrom<&BusLayoutModelDto> for BusLayoutModel {
    type Error = Error;

    fn try_from(dto: &BusLayoutModelDto) -> Result<Self> {
        let model = BusLayoutModel {
            id: BusModelId::new(dto.id.clone()),
            left_top_seat_columns: SeatGroup::try_from_dto(&dto.left_top_seat_columns, SeatGroupKind::LeftTopSeatColumns)?,
            left_seat_columns: SeatGroup::try_from_dto(&dto.left_seat_columns, SeatGroupKind::LeftSeatColumns)?,
            right_seat_columns: SeatGroup::try_from_dto(&dto.right_seat_columns, SeatGroupKind::RightSeatColumns)?,
            back_seats: SeatGroup::try_from_dto(&dto.back_seats, SeatGroupKind::BackSeats)?,
        };

        // A seat id must appear exactly once across the whole model;
        // a duplicate would make every status lookup for it ambiguous.
        {
            let mut seen: HashSet<&SeatId> = HashSet::new();
            for seat in model.iter_seats() {
                if !seen.insert(&seat.id) {
                    return Err(Error::MalformedLayout(format!(
                        "seat id '{}' appears more than once in model '{}'",
                        seat.id, model.id
                    )));
                }
            }
        }

        log::debug!("Validated bus layout model '{}' with {} seats.", model.id, model.seat_count());

        Ok(model)
    }
}
