//! # Company Client
//!
//! Provides a high‑level API for interacting with the `Company` actor.
use crate::company_actor::CompanyError;
use crate::model::{Company, CompanyCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};
use workforce_actor::{ActorClient, FrameworkError, ListQuery, Page, ResourceClient};

/// Client for interacting with the Company actor.
#[derive(Clone)]
pub struct CompanyClient {
    inner: ResourceClient<Company>,
}

impl CompanyClient {
    pub fn new(inner: ResourceClient<Company>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Company> for CompanyClient {
    type Error = CompanyError;

    fn inner(&self) -> &ResourceClient<Company> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CompanyError::NotFound(id),
            other => CompanyError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CompanyClient {
    #[instrument(skip(self))]
    pub async fn create_company(&self, params: CompanyCreate) -> Result<Company, CompanyError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Lists companies in creation order, optionally one page at a time.
    #[instrument(skip(self))]
    pub async fn list_companies(&self, page: Option<Page>) -> Result<Vec<Company>, CompanyError> {
        debug!("Sending request");
        let query = match page {
            Some(page) => ListQuery::paged(page),
            None => ListQuery::all(),
        };
        self.list(query).await
    }
}
