//! Type-safe wrappers around the generic [`ResourceClient`](workforce_actor::ResourceClient).

pub mod company_client;
pub mod employee_client;

pub use company_client::CompanyClient;
pub use employee_client::EmployeeClient;
