// Domain layer: block models and ports (interfaces) shared by the catalog, engine and hosts.

pub mod model;
pub mod ports;
