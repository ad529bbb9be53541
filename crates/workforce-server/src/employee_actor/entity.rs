//! Entity trait implementation for the Employee domain type.

use crate::model::{Employee, EmployeeCreate, EmployeeFilter, EmployeeId};
use workforce_actor::ActorEntity;

impl ActorEntity for Employee {
    type Id = EmployeeId;
    type Create = EmployeeCreate;
    type Update = EmployeeCreate;
    type Filter = EmployeeFilter;

    fn from_create_params(id: EmployeeId, params: EmployeeCreate) -> Self {
        Employee::new(id, params)
    }

    fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Whole-record replacement: every field but `id` comes from the update.
    fn on_update(&mut self, update: EmployeeCreate) {
        *self = Employee::new(self.id, update);
    }

    fn matches(&self, filter: &EmployeeFilter) -> bool {
        filter.accepts(self)
    }
}
