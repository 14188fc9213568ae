use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use uuid::Uuid;

use crate::api::availability_dto::{AvailabilityRequestDto, AvailabilityResponseDto};
use crate::api::layout_dto::BusLayoutModelDto;
use crate::domain::id::{BusModelId, QueryId, SeatId};
use crate::domain::layout::BusLayoutModel;
use crate::domain::seat::Gender;
use crate::domain::seat_map::SeatStatusMap;
use crate::domain::zoning::{self, DEFAULT_MAX_ROW_INCLUDED};
use crate::error::Result;

lazy_static! {
    /// Layout models validated so far, keyed by bus-model id. A model
    /// is validated once; every bus sharing it reuses the handle.
    static ref VALIDATED_LAYOUTS: RwLock<HashMap<BusModelId, Arc<BusLayoutModel>>> = RwLock::new(HashMap::new());
}

/// Result of one availability query.
#[derive(Debug, Clone)]
pub struct AvailabilityResponse {
    pub query_id: QueryId,
    pub gender: Gender,
    pub eligible_seat_ids: Vec<SeatId>,
}

impl AvailabilityResponse {
    pub fn to_dto(&self) -> AvailabilityResponseDto {
        AvailabilityResponseDto {
            query_id: self.query_id.to_string(),
            gender: self.gender.to_string(),
            eligible_seat_ids: self.eligible_seat_ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Resolves a layout document through the validation cache.
///
/// The first call for a model id validates the document and caches
/// the result; later calls return the shared handle without looking
/// at the document again. A malformed document is rejected here,
/// before any query reaches the engine, and is never cached.
pub fn validated_layout(dto: &BusLayoutModelDto) -> Result<Arc<BusLayoutModel>> {
    let model_id = BusModelId::new(dto.id.clone());

    if let Some(layout) = VALIDATED_LAYOUTS.read().expect("layout cache poisoned").get(&model_id) {
        return Ok(Arc::clone(layout));
    }

    let layout = Arc::new(BusLayoutModel::try_from(dto)?);
    log::info!("Bus layout model '{}' validated and cached ({} seats).", layout.id, layout.seat_count());

    let mut cache = VALIDATED_LAYOUTS.write().expect("layout cache poisoned");
    let entry = cache.entry(model_id).or_insert_with(|| Arc::clone(&layout));

    Ok(Arc::clone(entry))
}

/// Drops a model from the validation cache, so the next query
/// revalidates its document. Called when an administrator edits a bus
/// model.
pub fn invalidate_layout(model_id: &BusModelId) {
    let removed = VALIDATED_LAYOUTS.write().expect("layout cache poisoned").remove(model_id);

    if removed.is_some() {
        log::info!("Bus layout model '{}' dropped from the validation cache.", model_id);
    }
}

/// Answers one availability query against a bus's current seat state.
///
/// The request's gender value is checked here, before anything else;
/// the layout document is resolved through the validation cache; the
/// zoning engine then runs on a snapshot of the supplied seat states.
/// Neither input is mutated.
pub fn availability_query(request: &AvailabilityRequestDto, layout_dto: &BusLayoutModelDto) -> Result<AvailabilityResponse> {
    let gender = Gender::parse(&request.gender)?;
    let max_row_included = request.max_row_included.unwrap_or(DEFAULT_MAX_ROW_INCLUDED);

    let layout = validated_layout(layout_dto)?;
    let snapshot = SeatStatusMap::from_raw(&request.seat_status);

    let query_id = QueryId::new(Uuid::new_v4().to_string());
    log::debug!(
        "Availability query {}: gender={} maxRowIncluded={} model='{}' ({} live seat states).",
        query_id,
        gender,
        max_row_included,
        layout.id,
        snapshot.len()
    );

    let eligible_seat_ids = zoning::eligible_seats(gender, &snapshot, &layout, max_row_included);

    log::debug!("Availability query {}: {} eligible seats.", query_id, eligible_seat_ids.len());

    Ok(AvailabilityResponse { query_id, gender, eligible_seat_ids })
}
