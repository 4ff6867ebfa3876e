//! HTTP client module
//!
//! A thin wrapper over reqwest that issues one request per call.
//!
//! # Behavior
//!
//! - **No Retries**: a failed request is reported once, as is
//! - **Status Check**: any non-2xx status becomes `Error::HttpStatus`
//! - **JSON Decoding**: bodies are decoded with serde, shape mismatches become `Error::Decode`

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
