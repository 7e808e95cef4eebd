//! Gloss - translates source code into natural-language pseudocode
//!
//! The core is a translation cache keyed on the exact source text plus an
//! orchestrator that serves cached explanations or fetches fresh ones from a
//! remote explanation service. Editor hosting, rendering, and the LLM wire
//! protocol are collaborators behind trait seams.

pub mod config;
pub mod presentation;
pub mod translation;
