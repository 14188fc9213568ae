use std::collections::HashMap;

use crate::api::layout_dto::SeatStatusDto;
use crate::domain::id::SeatId;
use crate::domain::seat::SeatStatus;

/// Snapshot of one bus's live seat states at query time.
///
/// The underlying record is owned and mutated by the booking
/// subsystem; a fresh view is handed to the engine on every query.
/// Nothing in this crate writes it back.
#[derive(Debug, Clone, Default)]
pub struct SeatStatusMap {
    statuses: HashMap<SeatId, SeatStatus>,
}

impl SeatStatusMap {
    pub fn new() -> Self {
        SeatStatusMap { statuses: HashMap::new() }
    }

    /// Builds the snapshot from the raw wire dictionary of a request.
    pub fn from_raw(raw: &HashMap<String, SeatStatusDto>) -> Self {
        let statuses = raw.iter().map(|(id, status)| (SeatId::new(id.clone()), SeatStatus::from(*status))).collect();

        SeatStatusMap { statuses }
    }

    pub fn set(&mut self, id: SeatId, status: SeatStatus) {
        self.statuses.insert(id, status);
    }

    /// Current status of a seat. An id the snapshot does not know is
    /// reported as `Unavailable`, never as `Available`.
    pub fn status_of(&self, id: &SeatId) -> SeatStatus {
        self.statuses.get(id).copied().unwrap_or(SeatStatus::Unavailable)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
