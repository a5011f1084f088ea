// Domain layer: tier models and the table port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
