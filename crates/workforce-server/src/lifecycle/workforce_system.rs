use crate::clients::{CompanyClient, EmployeeClient};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Failure while stopping the system.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the Employee and Company stores.
///
/// `WorkforceSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors
/// - **Client Distribution**: Exposing one client per store
pub struct WorkforceSystem {
    /// Client for interacting with the Employee actor
    pub employee_client: EmployeeClient,

    /// Client for interacting with the Company actor
    pub company_client: CompanyClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl WorkforceSystem {
    /// Creates both actors and spawns each in its own Tokio task.
    ///
    /// `buffer_size` is the mailbox capacity of each actor. Must be called inside a Tokio
    /// runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (employee_actor, employee_client) = crate::employee_actor::new(buffer_size);
        let (company_actor, company_client) = crate::company_actor::new(buffer_size);

        let employee_handle = tokio::spawn(employee_actor.run());
        let company_handle = tokio::spawn(company_actor.run());

        Self {
            employee_client,
            company_client,
            handles: vec![employee_handle, company_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops the clients held here and waits for every actor task. Returns an error if an
    /// actor task panicked.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        // Dropping the senders lets each actor's receive loop end.
        drop(self.employee_client);
        drop(self.company_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
