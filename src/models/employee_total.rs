use serde::Serialize;

/// Accumulated monthly hours of one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeTotal {
    pub name: String,
    pub hours: f64,
}
