// Domain layer: bindings, patterns, sources and lessons, plus the ports the engine talks to.

pub mod model;
pub mod ports;
