pub mod args;
pub mod controller;
pub mod error;
pub mod model;

pub use controller::stats;
pub use error::StatsError;
