pub mod config;
pub mod models;
pub mod source;

pub use csv;
