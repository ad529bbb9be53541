//! Entity trait implementation for the Company domain type.

use crate::model::{Company, CompanyCreate, CompanyId};
use std::convert::Infallible;
use workforce_actor::ActorEntity;

impl ActorEntity for Company {
    type Id = CompanyId;
    type Create = CompanyCreate;
    type Update = CompanyCreate;
    // Companies are listed whole or by page only.
    type Filter = Infallible;

    fn from_create_params(id: CompanyId, params: CompanyCreate) -> Self {
        Company::new(id, params)
    }

    fn id(&self) -> &CompanyId {
        &self.id
    }

    /// Whole-record replacement: every field but `id` comes from the update.
    fn on_update(&mut self, update: CompanyCreate) {
        *self = Company::new(self.id, update);
    }

    fn matches(&self, filter: &Infallible) -> bool {
        match *filter {}
    }
}
