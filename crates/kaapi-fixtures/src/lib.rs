pub mod catalog;
pub mod cli;
pub mod config;
pub mod data;
pub mod distribution;
pub mod error;
