pub mod datasets;
pub mod files;
