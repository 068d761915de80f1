//! # Employee row joined with its area
//!
//! Every employee query selects the employee columns plus `areas.name AS area_name`,
//! so one row carries everything needed to build a [`store::Employee`] with the area
//! expanded. Use [`EMPLOYEE_COLUMNS`] as the projection and join `areas a` on
//! `a.id = e.area_id`.

use chrono::NaiveDate;
use sqlx::FromRow;
use store::{Area, Employee};

/// Projection matching [`EmployeeRow`] for `employees e JOIN areas a`.
pub const EMPLOYEE_COLUMNS: &str = "e.id, e.full_name, e.dni, e.birth_date, e.is_developer, \
     e.description, e.area_id, a.name AS area_name";

#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: i32,
    pub full_name: String,
    pub dni: String,
    pub birth_date: NaiveDate,
    pub is_developer: bool,
    pub description: Option<String>,
    pub area_id: i32,
    pub area_name: String,
}

impl EmployeeRow {
    /// Convert to the API model with the area expanded.
    pub fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            full_name: self.full_name,
            dni: self.dni,
            birth_date: self.birth_date,
            is_developer: self.is_developer,
            description: self.description,
            area_id: self.area_id,
            area: Area {
                id: self.area_id,
                name: self.area_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_employee_expands_area() {
        let row = EmployeeRow {
            id: 1,
            full_name: "A B".to_string(),
            dni: "1".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            is_developer: true,
            description: None,
            area_id: 3,
            area_name: "Engineering".to_string(),
        };
        let employee = row.into_employee();
        assert_eq!(employee.area_id, 3);
        assert_eq!(
            employee.area,
            Area {
                id: 3,
                name: "Engineering".to_string()
            }
        );
    }
}
