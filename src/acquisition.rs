pub mod controller;
pub mod core;
pub mod error;
