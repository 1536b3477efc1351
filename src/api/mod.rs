// src/api/mod.rs

//! Backend API surface: the shared client plus one module per endpoint group.

pub mod auth;
pub mod client;
pub mod complaints;
pub mod departments;
pub mod stats;
pub mod users;
pub mod votes;

pub use client::ApiClient;
