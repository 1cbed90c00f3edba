pub mod log;
pub mod migrate;
pub mod queries;
pub mod repository;
pub mod seed;
