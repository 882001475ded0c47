// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;
pub mod urls;

pub use net::Fetcher;
