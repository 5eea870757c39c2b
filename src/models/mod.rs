//! Settings models shared by the console binary and screens.

pub mod config;
