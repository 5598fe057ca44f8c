use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a persisted employee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Employee fields before the store has assigned an id. Doubles as the
/// replacement payload for updates.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    pub fn from_parts(id: EmployeeId, fields: NewEmployee) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
        }
    }

    /// Same id, every other field taken from `patch`.
    pub fn replaced_with(&self, patch: NewEmployee) -> Self {
        Self::from_parts(self.id, patch)
    }

    pub fn fields(&self) -> NewEmployee {
        NewEmployee::new(&self.first_name, &self.last_name, &self.email)
    }
}

/// What gets handed to [`crate::EmployeeStore::save`]: an insert or a replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmployeeRecord {
    Unsaved(NewEmployee),
    Saved(Employee),
}

impl EmployeeRecord {
    pub fn email(&self) -> &str {
        match self {
            EmployeeRecord::Unsaved(new) => &new.email,
            EmployeeRecord::Saved(employee) => &employee.email,
        }
    }
}

impl From<entity::employees::Model> for Employee {
    fn from(model: entity::employees::Model) -> Self {
        Self {
            id: EmployeeId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}
