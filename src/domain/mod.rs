// Domain layer: core models and ports. No AWS types cross this boundary.

pub mod model;
pub mod ports;
