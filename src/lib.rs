// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod crawl;
pub mod data;
pub mod merge;
pub mod progress;
pub mod runner;
pub mod store;
