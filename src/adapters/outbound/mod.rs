pub mod filesystem;
pub mod formatters;
pub mod network;
