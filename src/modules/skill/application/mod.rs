pub mod ports;
pub mod validation;
