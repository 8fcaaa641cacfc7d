//! Models shared by the server binary and the handlers.

pub mod config;
