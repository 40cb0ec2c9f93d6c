#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod carbon_calculator;
pub mod carbon_format;
pub mod route_builder;
pub mod transport_mode;
pub mod trip;
pub mod trip_route;
pub mod waypoint_decoder;
