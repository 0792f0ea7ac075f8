//! Upstream integrations.
//!
//! `llamastack` temporarily holds the upstream API datatypes; they will move
//! out once an official Rust SDK for Llama Stack exists.

pub mod client;
pub mod llamastack;

pub use client::{build_upstream_client, ClientError, HttpClient, LlamaStackClient, UpstreamClient};
