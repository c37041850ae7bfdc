// Domain layer: content records and ports (interfaces). No external
// dependencies beyond serde and the error type.

pub mod model;
pub mod ports;
