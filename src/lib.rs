// src/lib.rs

//! SCRS Client Library

pub mod actions;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod error;
pub mod loader;
pub mod models;
pub mod pagination;
pub mod render;
pub mod session;
pub mod state;
