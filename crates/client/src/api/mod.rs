//! Configured API clients for the Verdant REST API
//!
//! This module provides the client factory layer: request configuration,
//! a bearer-token HTTP client, and the factory that ties the two to the
//! token store.
//!
//! # Architecture
//!
//! - [`ApiConfig`] is immutable request configuration (base URL, timeout)
//! - [`ApiClient`] is built once per token value; the bearer header is
//!   fixed at construction and never mutated, so a token change means
//!   building a new client
//! - [`ClientFactory`] reads the current token from the injected
//!   [`crate::token::TokenStore`] each time it builds a client

pub mod client;
pub mod factory;

pub use client::ApiClient;
pub use factory::ClientFactory;

pub use crate::config::ApiConfig;
