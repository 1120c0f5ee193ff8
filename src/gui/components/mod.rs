// src/gui/components/mod.rs
pub mod data_table;
pub mod detail;
pub mod indicators;
pub mod search_bar;
pub mod summary_tiles;
