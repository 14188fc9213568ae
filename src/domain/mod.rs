pub mod availability;
pub mod id;
pub mod layout;
pub mod occupancy;
pub mod seat;
pub mod seat_map;
pub mod zoning;
