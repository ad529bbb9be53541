use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Employees. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl From<u32> for EmployeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents an employee record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](workforce_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](workforce_actor::ResourceActor).
///
/// See [`impl ActorEntity for Employee`](#impl-ActorEntity-for-Employee) for details on:
/// - Creation and replacement payload ([`EmployeeCreate`])
/// - List filter ([`EmployeeFilter`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: f64,
}

impl Employee {
    /// Creates a new Employee instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the store)
    /// * `params` - Every other field
    pub fn new(id: EmployeeId, params: EmployeeCreate) -> Self {
        Self {
            id,
            name: params.name,
            age: params.age,
            gender: params.gender,
            salary: params.salary,
        }
    }
}

/// Payload for creating an employee, and for replacing one on update.
///
/// An `id` field in the incoming JSON is ignored; the store assigns its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: f64,
}

/// Selects employees by gender, ignoring case.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFilter {
    pub gender: String,
}

impl EmployeeFilter {
    pub fn by_gender(gender: impl Into<String>) -> Self {
        Self {
            gender: gender.into(),
        }
    }

    pub fn accepts(&self, employee: &Employee) -> bool {
        employee.gender.to_lowercase() == self.gender.to_lowercase()
    }
}
