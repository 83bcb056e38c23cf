use serde::{Deserialize, Serialize};

/// Directory entry as delivered by the employee service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Employee reference on an attendance document. The store either populates
/// the full directory entry or leaves the raw id in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeRef {
    Populated(Employee),
    Id(String),
}

impl EmployeeRef {
    pub fn id(&self) -> &str {
        match self {
            EmployeeRef::Populated(employee) => &employee.id,
            EmployeeRef::Id(id) => id,
        }
    }

    /// Display name for tables and filters, falling back to the raw id when
    /// the reference was never populated.
    pub fn display_name(&self) -> &str {
        match self {
            EmployeeRef::Populated(employee) => &employee.name,
            EmployeeRef::Id(id) => id,
        }
    }
}
