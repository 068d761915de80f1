//! # Domain models for the employee directory
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Area`] | An organisational unit. Referenced, never owned, by employees. |
//! | [`Employee`] | A directory record. Always carries its [`Area`] expanded so clients can show `area.name` without a second request. |
//! | [`NewArea`] / [`NewEmployee`] | Validated write models, produced by [`crate::payload`] and consumed by [`crate::DirectoryStore`] writes. |
//!
//! Everything here is `Serialize + Deserialize` with camelCase field names, which is
//! the JSON shape of the HTTP API. `birthDate` is a calendar date (`YYYY-MM-DD`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An organisational unit (department).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: i32,
    pub name: String,
}

/// An employee with its area expanded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub full_name: String,
    pub dni: String,
    pub birth_date: NaiveDate,
    pub is_developer: bool,
    pub description: Option<String>,
    pub area_id: i32,
    pub area: Area,
}

/// Fields required to create or replace an area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArea {
    pub name: String,
}

/// Fields required to create or replace an employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub full_name: String,
    pub dni: String,
    pub birth_date: NaiveDate,
    pub is_developer: bool,
    pub description: Option<String>,
    pub area_id: i32,
}

impl NewEmployee {
    /// Attach an id and the resolved area, producing the stored record.
    pub fn into_employee(self, id: i32, area: Area) -> Employee {
        Employee {
            id,
            full_name: self.full_name,
            dni: self.dni,
            birth_date: self.birth_date,
            is_developer: self.is_developer,
            description: self.description,
            area_id: area.id,
            area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_json_shape() {
        let employee = NewEmployee {
            full_name: "Ada Lovelace".to_string(),
            dni: "12345678".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            is_developer: true,
            description: None,
            area_id: 2,
        }
        .into_employee(
            5,
            Area {
                id: 2,
                name: "TI".to_string(),
            },
        );

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["birthDate"], "1990-01-01");
        assert_eq!(json["isDeveloper"], true);
        assert_eq!(json["areaId"], 2);
        assert_eq!(json["area"]["name"], "TI");
        assert!(json["description"].is_null());
    }
}
