// Domain layer: geo math, core models, the store entity and the ports
// (interfaces) the query service depends on.

pub mod geo;
pub mod model;
pub mod ports;
pub mod store;
