pub mod design;
pub mod error;
