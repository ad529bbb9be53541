//! # Employee Client
//!
//! Provides a high‑level API for interacting with the `Employee` actor.
//! It wraps a `ResourceClient<Employee>` and exposes domain‑specific methods.
use crate::employee_actor::EmployeeError;
use crate::model::{Employee, EmployeeCreate, EmployeeFilter};
use async_trait::async_trait;
use tracing::{debug, instrument};
use workforce_actor::{ActorClient, FrameworkError, ListQuery, Page, ResourceClient};

/// Client for interacting with the Employee actor.
///
/// `get`, `update`, `delete` and `clear` come from [`ActorClient`].
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Employee> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => EmployeeError::NotFound(id),
            other => EmployeeError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl EmployeeClient {
    #[instrument(skip(self))]
    pub async fn create_employee(&self, params: EmployeeCreate) -> Result<Employee, EmployeeError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Lists employees in creation order.
    ///
    /// A `page` takes priority: it is cut from the full collection and `gender` is ignored.
    /// Without a page, `gender` keeps the employees whose gender matches, ignoring case.
    #[instrument(skip(self))]
    pub async fn list_employees(
        &self,
        gender: Option<String>,
        page: Option<Page>,
    ) -> Result<Vec<Employee>, EmployeeError> {
        debug!("Sending request");
        let query = ListQuery {
            filter: gender.map(EmployeeFilter::by_gender),
            page,
        };
        self.list(query).await
    }
}
