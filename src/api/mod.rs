// API layer module (adapters for controllers)
// The HTTP surface is an adapter over the domain and provider layers

pub mod errors;
pub mod handlers;
