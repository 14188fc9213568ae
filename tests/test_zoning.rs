use campus_bus_seating::api::layout_dto::{BusLayoutModelDto, SeatDto, SeatGroupDto, SeatStatusDto};
use campus_bus_seating::domain::id::SeatId;
use campus_bus_seating::domain::layout::BusLayoutModel;
use campus_bus_seating::domain::seat::Gender;
use campus_bus_seating::domain::seat_map::SeatStatusMap;
use campus_bus_seating::domain::zoning::eligible_seats;

fn seat(id: &str) -> SeatDto {
    SeatDto { id: id.to_string(), status: None }
}

fn seat_with(id: &str, status: SeatStatusDto) -> SeatDto {
    SeatDto { id: id.to_string(), status: Some(status) }
}

fn group(seats_per_row: i64, rows: Vec<Vec<SeatDto>>) -> SeatGroupDto {
    SeatGroupDto { height: 2, seats_rows: rows, seats_per_row }
}

fn empty_group() -> SeatGroupDto {
    group(2, vec![])
}

fn model(id: &str, left_top: SeatGroupDto, left: SeatGroupDto, right: SeatGroupDto, back: SeatGroupDto) -> BusLayoutModelDto {
    BusLayoutModelDto {
        id: id.to_string(),
        left_top_seat_columns: left_top,
        left_seat_columns: left,
        right_seat_columns: right,
        back_seats: back,
        door: None,
        driver: None,
    }
}

/// Layout plus the seat-status snapshot a fresh bus of it starts with.
fn build(dto: &BusLayoutModelDto) -> (BusLayoutModel, SeatStatusMap) {
    let layout = BusLayoutModel::try_from(dto).expect("test layout should validate");
    let map = SeatStatusMap::from_raw(&dto.initial_seat_status());
    (layout, map)
}

fn ids(result: &[SeatId]) -> Vec<&str> {
    result.iter().map(|id| id.as_str()).collect()
}

#[test]
fn worked_scenario_back_bench_only() {
    // Back bench: B1 available, B2 reserved. Left columns: L1
    // available in the front row, L2 booked by a female in the back
    // row. The male scan starts at the back row, hits L2 and stops
    // before ever reaching L1.
    let back = group(2, vec![vec![seat("B1"), seat_with("B2", SeatStatusDto::Reserved)]]);
    let left = group(1, vec![vec![seat("L1")], vec![seat_with("L2", SeatStatusDto::BookedFemale)]]);
    let dto = model("scenario", empty_group(), left, empty_group(), back);
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Male, &map, &layout, 2);

    assert_eq!(ids(&result), vec!["B1"]);
}

#[test]
fn result_is_deterministic() {
    let back = group(3, vec![vec![seat("B1"), seat("B2"), seat("B3")]]);
    let left = group(2, vec![vec![seat("L1"), seat("L2")], vec![seat("L3")], vec![seat_with("L4", SeatStatusDto::BookedMale)]]);
    let right = group(2, vec![vec![seat("R1")], vec![seat_with("R2", SeatStatusDto::Reserved)]]);
    let dto = model("det", empty_group(), left, right, back);
    let (layout, map) = build(&dto);

    let first = eligible_seats(Gender::Male, &map, &layout, 2);
    let second = eligible_seats(Gender::Male, &map, &layout, 2);

    assert_eq!(first, second, "identical inputs must produce the identical ordered result");
}

#[test]
fn back_bench_is_unconditional_for_males() {
    let back = group(2, vec![vec![seat("B1"), seat("B2")], vec![seat("B3")]]);
    let left = group(1, vec![vec![seat("L1")]]);
    let dto = model("back-zone", empty_group(), left, empty_group(), back);
    let (layout, map) = build(&dto);

    // Even with a row budget of zero the home zone is offered.
    let result = eligible_seats(Gender::Male, &map, &layout, 0);

    assert_eq!(ids(&result), vec!["B1", "B2", "B3"]);
}

#[test]
fn left_top_columns_are_unconditional_for_females() {
    let left_top = group(2, vec![vec![seat("T1"), seat("T2")]]);
    let left = group(1, vec![vec![seat("L1")]]);
    let dto = model("top-zone", left_top, left, empty_group(), empty_group());
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Female, &map, &layout, 0);

    assert_eq!(ids(&result), vec!["T1", "T2"]);
}

#[test]
fn opposite_gender_row_halts_the_whole_group() {
    // The male scan visits row 2 first; its female booking excludes
    // the entire group even though rows 0 and 1 are fully available.
    let left = group(1, vec![vec![seat("L1")], vec![seat("L2")], vec![seat_with("L3", SeatStatusDto::BookedFemale)]]);
    let dto = model("halt", empty_group(), left, empty_group(), empty_group());
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Male, &map, &layout, 5);

    assert!(result.is_empty(), "no left-column seat may be offered past a female-booked row, got {:?}", result);
}

#[test]
fn boundary_row_is_not_partially_harvested() {
    // M1 is available but shares its row with a female booking; the
    // row is a hard boundary and contributes nothing.
    let left = group(2, vec![vec![seat("M1"), seat_with("M2", SeatStatusDto::BookedFemale)]]);
    let dto = model("mixed-row", empty_group(), left, empty_group(), empty_group());
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Male, &map, &layout, 2);

    assert!(result.is_empty(), "available seats of a boundary row must not be offered, got {:?}", result);
}

#[test]
fn row_budget_caps_the_expansion() {
    let left = group(1, vec![vec![seat("L1")], vec![seat("L2")]]);
    let dto = model("cap", empty_group(), left, empty_group(), empty_group());
    let (layout, map) = build(&dto);

    // Male scan starts at the back row: only L2 fits the budget.
    let male = eligible_seats(Gender::Male, &map, &layout, 1);
    assert_eq!(ids(&male), vec!["L2"]);

    // Female scan starts at the front row: only L1 fits the budget.
    let female = eligible_seats(Gender::Female, &map, &layout, 1);
    assert_eq!(ids(&female), vec!["L1"]);
}

#[test]
fn rows_without_available_seats_do_not_consume_the_budget() {
    // The back row holds only a reserved seat. It neither blocks the
    // scan nor counts toward the budget, so the front row's seat is
    // still offered with a budget of one.
    let left = group(1, vec![vec![seat("L1")], vec![seat_with("L2", SeatStatusDto::Reserved)]]);
    let dto = model("free-pass", empty_group(), left, empty_group(), empty_group());
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Male, &map, &layout, 1);

    assert_eq!(ids(&result), vec!["L1"]);
}

#[test]
fn reserved_and_unavailable_seats_are_never_eligible_and_never_block() {
    let left = group(3, vec![
        vec![seat_with("L1", SeatStatusDto::Reserved), seat("L2"), seat_with("L3", SeatStatusDto::Unavailable)],
        vec![seat("L4")],
    ]);
    let dto = model("inert-states", empty_group(), left, empty_group(), empty_group());
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Male, &map, &layout, 2);

    // Back-to-front: row 1 contributes L4, row 0 contributes L2 only.
    assert_eq!(ids(&result), vec!["L4", "L2"]);
}

#[test]
fn male_and_female_zoning_are_structural_mirrors() {
    // Mirror of the male setup: home zones swapped, shared rows
    // reversed, booked genders swapped.
    let male_dto = model(
        "mirror-male",
        group(1, vec![vec![seat("Z1")]]),
        group(1, vec![vec![seat("L1")], vec![seat_with("L2", SeatStatusDto::BookedFemale)]]),
        group(1, vec![vec![seat("R1")]]),
        group(1, vec![vec![seat("A1")]]),
    );
    let female_dto = model(
        "mirror-female",
        group(1, vec![vec![seat("A1")]]),
        group(1, vec![vec![seat_with("L2", SeatStatusDto::BookedMale)], vec![seat("L1")]]),
        group(1, vec![vec![seat("R1")]]),
        group(1, vec![vec![seat("Z1")]]),
    );
    let (male_layout, male_map) = build(&male_dto);
    let (female_layout, female_map) = build(&female_dto);

    let male = eligible_seats(Gender::Male, &male_map, &male_layout, 2);
    let female = eligible_seats(Gender::Female, &female_map, &female_layout, 2);

    assert_eq!(male, female, "the two branches must mirror each other");
    assert_eq!(ids(&male), vec!["A1", "R1"]);
}

#[test]
fn stale_ids_in_the_status_map_are_ignored() {
    let back = group(1, vec![vec![seat("B1")]]);
    let dto = model("stale", empty_group(), empty_group(), empty_group(), back);
    let layout = BusLayoutModel::try_from(&dto).expect("test layout should validate");

    let mut raw = dto.initial_seat_status();
    raw.insert("GHOST".to_string(), SeatStatusDto::Available);
    let map = SeatStatusMap::from_raw(&raw);

    let result = eligible_seats(Gender::Male, &map, &layout, 2);

    assert_eq!(ids(&result), vec!["B1"], "an id unknown to the layout must neither appear nor fail");
}

#[test]
fn seats_missing_from_the_map_are_not_offered() {
    let back = group(1, vec![vec![seat("B1")]]);
    let dto = model("absent", empty_group(), empty_group(), empty_group(), back);
    let layout = BusLayoutModel::try_from(&dto).expect("test layout should validate");

    // Empty snapshot: the layout's seats have no recorded state, which
    // must read as unavailable rather than available.
    let result = eligible_seats(Gender::Male, &SeatStatusMap::new(), &layout, 2);

    assert!(result.is_empty(), "absent status must never count as available, got {:?}", result);
}

#[test]
fn output_lists_home_zone_then_left_then_right() {
    let back = group(2, vec![vec![seat("B1"), seat("B2")], vec![seat("B3")]]);
    let left = group(1, vec![vec![seat("L1")]]);
    let right = group(1, vec![vec![seat("R1")]]);
    let dto = model("order-male", empty_group(), left, right, back);
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Male, &map, &layout, 2);

    assert_eq!(ids(&result), vec!["B1", "B2", "B3", "L1", "R1"]);
}

#[test]
fn female_scan_walks_front_to_back() {
    let left_top = group(1, vec![vec![seat("T1")]]);
    let left = group(1, vec![vec![seat("L1")], vec![seat("L2")]]);
    let dto = model("order-female", left_top, left, empty_group(), empty_group());
    let (layout, map) = build(&dto);

    let result = eligible_seats(Gender::Female, &map, &layout, 2);

    assert_eq!(ids(&result), vec!["T1", "L1", "L2"]);
}

#[test]
fn empty_layout_yields_no_seats() {
    let dto = model("empty", empty_group(), empty_group(), empty_group(), empty_group());
    let (layout, map) = build(&dto);

    assert!(eligible_seats(Gender::Male, &map, &layout, 2).is_empty());
    assert!(eligible_seats(Gender::Female, &map, &layout, 2).is_empty());
}
