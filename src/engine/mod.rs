pub mod absence;
pub mod summary;
