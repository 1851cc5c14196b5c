//! Empower Ideas API Library
//!
//! This library provides the core functionality for the Empower Ideas
//! service: the form submission domain model, prompt assembly, and the
//! clients for the hosted completion and image-generation services.

pub mod api;
pub mod config;
pub mod domain;
pub mod llm;
pub mod prompts;
