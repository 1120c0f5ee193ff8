// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;

pub mod csv;
pub mod export;
pub mod feed;
pub mod group;
pub mod gui;
pub mod record;
pub mod worker;
