// Domain layer: unit catalog, request/result models and ports.

pub mod model;
pub mod ports;
pub mod units;
