//! Typed client core for the Sylius cart and checkout API.
//!
//! # Overview
//! Covers four operations: fetch a cart, create a cart, add an item, and
//! submit checkout addresses. Each one validates its arguments, builds an
//! `HttpRequest`, sends it through a pluggable `Transport`, checks the status
//! against a per-operation rule and hydrates the body.
//!
//! # Design
//! - `SyliusClient` is stateless apart from its transport and hydrator.
//! - The `Transport` trait is the only I/O seam; `UreqTransport` (feature
//!   `ureq`, on by default) is the stock implementation, tests plug in stubs.
//! - The status table lives in `classify` as data, one row per operation.
//! - `JsonHydrator` vs `RawResponses` is chosen at construction and changes
//!   every operation's return type at once.
//! - DTOs are defined independently from the mock-server crate; end-to-end
//!   tests catch schema drift.

mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod hydrate;
mod request;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;
mod validate;

pub use client::SyliusClient;
pub use config::TransportConfig;
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use hydrate::{Hydrator, JsonHydrator, RawResponses};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{Address, Cart, CartItem, REQUIRED_ADDRESS_FIELDS};
