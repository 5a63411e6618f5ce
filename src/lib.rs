pub mod aggregate;
pub mod api;
pub mod binding;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod scatter;

// cmd and reports are binary modules (see main.rs); everything a host
// needs to drive the dashboard lives in this library.
