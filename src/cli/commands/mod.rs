pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod gantt;
pub mod init;
pub mod list;
pub mod log;
pub mod move_bar;
