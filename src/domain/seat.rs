use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::layout_dto::{SeatDto, SeatStatusDto};
use crate::domain::id::SeatId;
use crate::error::{Error, Result};

/// Occupancy state of a single seat.
///
/// The two booked states record the gender of the passenger holding
/// the seat; the zoning engine reads them as zone boundaries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SeatStatus {
    /// The seat can be offered to a new passenger.
    Available,
    /// Held by a male passenger.
    BookedMale,
    /// Held by a female passenger.
    BookedFemale,
    /// Blocked by an administrator; never offerable.
    Reserved,
    /// Not sellable, or unknown to the live seat-status record.
    Unavailable,
}

impl From<SeatStatusDto> for SeatStatus {
    fn from(dto: SeatStatusDto) -> Self {
        match dto {
            SeatStatusDto::Available => SeatStatus::Available,
            SeatStatusDto::BookedMale => SeatStatus::BookedMale,
            SeatStatusDto::BookedFemale => SeatStatus::BookedFemale,
            SeatStatusDto::Reserved => SeatStatus::Reserved,
            SeatStatusDto::Unavailable => SeatStatus::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses the gender value of an incoming availability request.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(Error::InvalidArgument(format!("unknown gender value '{}'", other))),
        }
    }

    /// The booking status that marks a row as taken by the opposite
    /// gender, i.e. the hard boundary for zone expansion.
    pub fn boundary_status(self) -> SeatStatus {
        match self {
            Gender::Male => SeatStatus::BookedFemale,
            Gender::Female => SeatStatus::BookedMale,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// One seat as authored in a bus model.
///
/// The status here is the seed state a new bus of the model starts
/// with; the live state of a bus's seat is tracked in a
/// [`SeatStatusMap`](crate::domain::seat_map::SeatStatusMap), which is
/// all the zoning engine ever reads.
#[derive(Debug, Clone)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
}

impl From<&SeatDto> for Seat {
    fn from(dto: &SeatDto) -> Self {
        Seat {
            id: SeatId::new(dto.id.clone()),
            status: dto.status.map(SeatStatus::from).unwrap_or(SeatStatus::Available),
        }
    }
}
