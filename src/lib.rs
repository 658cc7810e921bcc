//! Course generation service for Side Courses - turns creator content into
//! AI-driven conversational courses.
//!
//! This service builds a prompt pair from an inbound generation request,
//! performs one chat-completion call against the AI gateway, and parses the
//! model output into a structured course document with a degraded fallback.

pub mod app;
pub mod course;
pub mod error;
pub mod gateway;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
