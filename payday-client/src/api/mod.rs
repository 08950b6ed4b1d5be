//! Typed endpoint wrappers
//!
//! One impl block per resource, mirroring the backend's REST surface.

mod departments;
mod designations;
mod employees;
mod payrolls;

use crate::{ApiResult, ClientConfig, HttpClient, RestClient};

/// Page size large enough to show "all" records in the simple list views.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Typed API client over any [`HttpClient`] transport
#[derive(Debug, Clone)]
pub struct PaydayClient<C: HttpClient> {
    http: C,
}

impl PaydayClient<RestClient> {
    /// Connect to the backend described by `config`
    pub fn connect(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::new(config.build_rest_client()?))
    }
}

impl<C: HttpClient> PaydayClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }
}
