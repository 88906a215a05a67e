pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
