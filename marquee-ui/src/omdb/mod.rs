//! OMDb API access

mod client;
mod types;

pub use client::{OmdbClient, OmdbError};
