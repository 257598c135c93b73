pub mod db;
pub mod fetcher;
pub mod gateway;
