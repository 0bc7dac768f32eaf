pub mod check;
pub mod clean;
pub mod config;
pub mod generate;
pub mod status;
