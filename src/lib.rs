// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod article;
pub mod extract;
pub mod fetch;
pub mod store;
pub mod corpus;
pub mod analysis;

pub mod csv;
pub mod file;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
