// Domain layer module exports
//
// The only entity is the transient Submission collected from one form
// interaction; nothing here outlives a single request/response cycle.

pub mod submission;

pub use submission::{Submission, Technology};
