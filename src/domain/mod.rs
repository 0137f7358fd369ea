// Domain layer: models and ports. No dependency on any concrete transport.

pub mod model;
pub mod ports;
