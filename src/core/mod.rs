// src/core/mod.rs

pub mod markdown;
pub mod net;
