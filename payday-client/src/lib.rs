//! Payday Client - HTTP client for the payroll REST backend
//!
//! Provides the low-level JSON transport (`RestClient` behind the
//! `HttpClient` trait) and typed per-resource endpoint wrappers
//! (`PaydayClient`).

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{DEFAULT_PAGE_SIZE, PaydayClient};
pub use config::{ClientConfig, ENV_API_URL};
pub use error::{ApiError, ApiResult};
pub use http::{HttpClient, RestClient};
