// Domain layer: plain data models and the ports the core runs against.

pub mod model;
pub mod ports;
