//! Employee record and request payloads.

use serde::{Deserialize, Serialize};

/// An employee as reported by the upstream directory.
///
/// Only ever decoded from upstream responses. The upstream prefixes its
/// field names with `employee_`; both spellings are accepted and the
/// unprefixed one is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier assigned by the upstream.
    pub id: String,

    #[serde(default, alias = "employee_name")]
    pub name: Option<String>,

    #[serde(default, alias = "employee_salary")]
    pub salary: Option<u64>,

    #[serde(default, alias = "employee_age")]
    pub age: Option<u32>,

    #[serde(default, alias = "employee_title")]
    pub title: Option<String>,

    #[serde(default, alias = "employee_email")]
    pub email: Option<String>,
}

impl Employee {
    /// The name, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Payload for creating an employee. Forwarded to the upstream as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: Option<String>,
    pub salary: Option<u64>,
    pub age: Option<u32>,
    pub title: Option<String>,
    pub email: Option<String>,
}

/// Body of the upstream delete call. Built from a looked-up employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}
