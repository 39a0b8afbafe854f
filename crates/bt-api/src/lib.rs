//! # bt-api
//!
//! Signing HTTP client for the panel management API.
//!
//! Provides:
//! - Time-based request-token derivation ([`auth`])
//! - Form-encoded API invocation with JSON response decoding ([`client`])
//! - Typed response shapes for the two project kinds ([`response`])
//!
//! # Architecture
//!
//! The CLI builds a [`client::PanelClient`] from a [`client::PanelConfig`]
//! and calls one lifecycle operation per invocation. Every outgoing request
//! carries a fresh `request_time`/`request_token` pair derived from the
//! shared API key.
//!
//! ```text
//! ┌────────┐   signed form POST    ┌─────────────┐
//! │ bt-cli │◄─────────────────────►│  panel API  │
//! └────────┘   (JSON response)     └─────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod client;
pub mod error;
pub mod response;

pub use auth::{RequestSignature, request_token};
pub use client::{PanelClient, PanelConfig, ProjectAction};
pub use error::ApiError;
pub use response::{GenericProjectResponse, NodeProjectResponse};
