//! Tram network compiler and query engine.
//!
//! Compiles a plain-text line schedule and a stop position table into a
//! single network snapshot, then answers questions about it: which lines
//! serve a stop, which lines connect two stops, how long a ride takes, and
//! how far apart two stops are.

pub mod commands;
pub mod config;
pub mod dialogue;
pub mod distance;
pub mod domain;
pub mod network;
pub mod query;
pub mod schedule;
pub mod stops;
