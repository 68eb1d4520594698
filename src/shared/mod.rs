pub mod api;
pub mod json_field;
pub mod storage;
pub mod validation;
