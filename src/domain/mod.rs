// Domain layer: animal variants, the flight capability and the repository port.

pub mod model;
pub mod ports;
