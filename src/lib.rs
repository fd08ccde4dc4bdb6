pub mod columns;
pub mod commands;
pub mod config;
pub mod controller;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod loader;
pub mod normalize;
pub mod positions;
pub mod roster;
pub mod scoring;
pub mod tui;
pub mod types;
