pub mod category;
pub mod entry;
pub mod month;
