//! Studio Server: configuration and service composition for the
//! `studio-server` binary.

pub mod config;
pub mod services;
