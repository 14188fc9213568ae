use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::layout_dto::SeatStatusDto;

/// An availability query as received from the booking layer.
///
/// `seat_status` is the bus's live seat-status record at the time of
/// the request. `max_row_included` bounds how far the requesting
/// gender's zone may expand into the shared rows; when absent the
/// engine default applies.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequestDto {
    pub gender: String,
    pub seat_status: HashMap<String, SeatStatusDto>,
    pub max_row_included: Option<u32>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponseDto {
    pub query_id: String,
    pub gender: String,
    pub eligible_seat_ids: Vec<String>,
}
