// Domain layer: the loaded document, embed options and the two ports between them.

pub mod model;
pub mod ports;
