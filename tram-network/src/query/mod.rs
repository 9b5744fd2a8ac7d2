//! Question answering over a compiled network.
//!
//! Commands follow a small fixed grammar (`via`, `between`, `time with`,
//! `distance from`). [`Query::parse`] recognises the shape and
//! [`QueryEngine`] looks the arguments up, producing an [`Answer`] that is
//! either a result or one of two failure markers.

mod answer;
mod engine;
mod parse;

pub use answer::Answer;
pub use engine::{QueryEngine, TravelTimeError};
pub use parse::Query;
