//! Domain model types

pub mod cargo_kind;
pub mod distance_range;
pub mod income_sample;
pub mod sweep_request;
pub mod trip;

pub use cargo_kind::CargoKind;
pub use distance_range::DistanceRange;
pub use income_sample::IncomeSample;
pub use sweep_request::SweepRequest;
pub use trip::TripParameters;
