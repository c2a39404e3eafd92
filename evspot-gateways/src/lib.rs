//! Adapters for the third party services used by evspot.
//!
//! All gateways perform blocking HTTP requests and must not be
//! called from within an async context.

pub mod gemini;
pub mod opencage;
pub mod osrm;
