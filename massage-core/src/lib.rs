//! Core library for the `massage` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The HTTP gateway to the massage supplier service
//! - Wire bindings for the supplier's quote schema
//! - Booking rules and shared domain models (offers, cancellation schedules)
//!
//! It is used by `massage-cli`, but can also be reused by other binaries or services.

pub mod binding;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod policy;
pub mod service;

pub use binding::QuoteResponse;
pub use config::Config;
pub use error::GatewayError;
pub use gateway::{DEFAULT_BASE_URL, HttpGateway, MassageGateway};
pub use model::{CancellationPolicy, Massage, MassageStatus};
pub use service::MassageService;
