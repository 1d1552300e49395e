pub mod api;
pub mod cli;
pub mod config;
mod context;
pub mod controller;
pub mod persistence;
pub mod proxy;

pub use context::{AppContext, DefaultController};
