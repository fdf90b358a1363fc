// Domain layer: core models and ports (interfaces). No I/O, no external dependencies beyond std/serde.

pub mod bounded;
pub mod field;
pub mod plan;
pub mod ports;
