use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::{Employee, EmployeeId};
use tracing::{debug, error};
use url::Url;

pub mod avatar;
pub mod config;
pub mod directory;
pub mod error;
pub mod search;
pub mod view;

pub use directory::{DirectoryController, DirectoryPhase, DirectoryState, LoadOutcome, LoadTicket};
pub use error::{FetchFailure, FetchFailureKind, FETCH_FAILURE_FALLBACK};
pub use search::{filter_employees, matches_query, SearchDebouncer};
pub use view::{DirectoryView, EmployeeCard, ViewKind};

/// Where employee records come from.
///
/// `list_employees` is the only required operation; the lookups below are
/// built on top of it and cost one full listing each.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, FetchFailure>;

    async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, FetchFailure> {
        let employees = self.list_employees().await?;
        Ok(employees.into_iter().find(|employee| employee.id == id))
    }

    async fn search_employees(&self, query: &str) -> Result<Vec<Employee>, FetchFailure> {
        let employees = self.list_employees().await?;
        Ok(filter_employees(&employees, query))
    }
}

#[async_trait]
impl<S: EmployeeSource + ?Sized> EmployeeSource for Arc<S> {
    async fn list_employees(&self) -> Result<Vec<Employee>, FetchFailure> {
        (**self).list_employees().await
    }
}

/// Lists employees with a plain GET against a fixed endpoint.
pub struct HttpEmployeeSource {
    http: Client,
    endpoint: Url,
}

impl HttpEmployeeSource {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http,
            endpoint: config::parse_endpoint(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn list_employees(&self) -> Result<Vec<Employee>, FetchFailure> {
        let endpoint = self.endpoint.as_str();
        debug!(endpoint, "fetching employees");

        let response = match self.http.get(self.endpoint.clone()).send().await {
            Ok(response) => response,
            Err(err) => {
                error!(endpoint, "error fetching employees: {err}");
                return Err(FetchFailure::transport());
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                error!(endpoint, status = status.as_u16(), "error reading employee response: {err}");
                return Err(FetchFailure::transport());
            }
        };

        if !status.is_success() {
            let failure = FetchFailure::from_status(status.as_u16(), &body);
            error!(endpoint, status = status.as_u16(), "employee endpoint returned error: {failure}");
            return Err(failure);
        }

        match serde_json::from_slice::<Vec<Employee>>(&body) {
            Ok(employees) => {
                debug!(endpoint, count = employees.len(), "fetched employees");
                Ok(employees)
            }
            Err(err) => {
                error!(endpoint, "invalid employee list payload: {err}");
                Err(FetchFailure::from_undecodable_body(&body))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
