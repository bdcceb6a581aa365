//! Core gumshoe library (config, Groq provider client).

pub mod config;
pub mod providers;
