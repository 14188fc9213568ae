use std::collections::HashMap;
use std::process::ExitCode;

use clap::Parser;

use campus_bus_seating::api::availability_dto::AvailabilityRequestDto;
use campus_bus_seating::api::layout_dto::{BusLayoutModelDto, SeatStatusDto};
use campus_bus_seating::domain::availability::{availability_query, validated_layout};
use campus_bus_seating::domain::occupancy::occupancy_report;
use campus_bus_seating::domain::seat_map::SeatStatusMap;
use campus_bus_seating::domain::zoning::DEFAULT_MAX_ROW_INCLUDED;
use campus_bus_seating::error::Result;
use campus_bus_seating::loader::parser::parse_json_file;
use campus_bus_seating::logger;

/// Seat-availability check for a single bus: which seats could be
/// offered to a passenger of the given gender right now.
#[derive(Parser, Debug)]
#[command(name = "campus_bus_seating", version, about)]
struct Cli {
    /// Path to the bus layout model JSON document.
    #[arg(long)]
    layout: String,

    /// Path to a live seat-status JSON document (seat id -> status).
    /// Without it the model's authored seat states are used.
    #[arg(long)]
    status: Option<String>,

    /// Gender of the requesting passenger (male or female).
    #[arg(long)]
    gender: String,

    /// How many shared rows per group the zone may expand into.
    #[arg(long, default_value_t = DEFAULT_MAX_ROW_INCLUDED)]
    max_rows: u32,
}

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let layout_dto: BusLayoutModelDto = parse_json_file(&cli.layout)?;
    log::info!("Layout document '{}' parsed successfully.", cli.layout);

    let seat_status: HashMap<String, SeatStatusDto> = match &cli.status {
        Some(path) => parse_json_file(path)?,
        // No live record supplied: a fresh bus starts from the
        // statuses authored in its model.
        None => layout_dto.initial_seat_status(),
    };

    let request = AvailabilityRequestDto {
        gender: cli.gender.clone(),
        seat_status,
        max_row_included: Some(cli.max_rows),
    };

    let response = availability_query(&request, &layout_dto)?;

    println!("Eligible seats for a {} passenger (query {}):", response.gender, response.query_id);
    if response.eligible_seat_ids.is_empty() {
        println!("  none");
    } else {
        let ids: Vec<String> = response.eligible_seat_ids.iter().map(|id| id.to_string()).collect();
        println!("  {}", ids.join(", "));
    }

    let layout = validated_layout(&layout_dto)?;
    let snapshot = SeatStatusMap::from_raw(&request.seat_status);
    println!("{}", occupancy_report(&snapshot, &layout));

    Ok(())
}
