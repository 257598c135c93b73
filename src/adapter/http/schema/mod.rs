pub mod batch;
pub mod pagination;
pub mod profile;
