// Domain layer: records, query results and the ports the adapters implement.

pub mod lenient;
pub mod model;
pub mod ports;
