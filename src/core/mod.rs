pub mod builder;
pub mod config;
pub mod constants;
pub mod geo;
pub mod place;
pub mod preview;
pub mod region;
pub mod route;
