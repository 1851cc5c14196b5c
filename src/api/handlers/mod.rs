pub mod ideas;

pub use ideas::{submit_ideas, AppState, IdeasResponse};
