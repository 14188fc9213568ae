use std::sync::Arc;

use crate::api::layout_dto::BusLayoutModelDto;
use crate::domain::availability::validated_layout;
use crate::domain::layout::BusLayoutModel;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads a bus layout model document from disk, validates it, and
/// registers it with the per-model layout cache.
pub fn load_validated_layout(file_path: &str) -> Result<Arc<BusLayoutModel>> {
    let dto: BusLayoutModelDto = parse_json_file::<BusLayoutModelDto>(file_path)?;
    log::info!("Layout document '{}' parsed successfully.", file_path);

    let layout = validated_layout(&dto)?;
    log::info!("Bus layout model '{}' ready ({} seats).", layout.id, layout.seat_count());

    Ok(layout)
}
