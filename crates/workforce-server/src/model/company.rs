use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Companies. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub u32);

impl From<u32> for CompanyId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a company record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](workforce_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](workforce_actor::ResourceActor).
/// Companies have no list filter, only paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

/// Payload for creating a company, and for replacing one on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCreate {
    pub name: String,
}

impl Company {
    /// Builds a company from its store-assigned `id` and every other field in `params`.
    pub fn new(id: CompanyId, params: CompanyCreate) -> Self {
        Self {
            id,
            name: params.name,
        }
    }
}
