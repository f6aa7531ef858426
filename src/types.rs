//! Employee data model

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Employee as exchanged over HTTP.
///
/// `id` is assigned by the store and is never taken from a client on create.
/// Fields missing from a request body fall back to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub age: i64,
}

impl Employee {
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            age: self.age,
            salary: self.salary,
        }
    }
}

/// Employee as persisted in the `employees` collection.
///
/// Documents written by other clients may lack any field; missing ones
/// decode as zero values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: i64,
}

impl From<Employee> for EmployeeRecord {
    /// Drops whatever id the client supplied.
    fn from(employee: Employee) -> Self {
        Self {
            id: None,
            name: employee.name,
            salary: employee.salary,
            age: employee.age,
        }
    }
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: record.name,
            salary: record.salary,
            age: record.age,
        }
    }
}

/// The mutable part of an employee, replaced as a whole on update.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub age: i64,
    pub salary: f64,
}

/// Parse a path identifier into the store's native id format.
pub fn parse_employee_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| Error::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_empty_id_is_omitted() {
        let employee = Employee {
            name: "Ana".to_string(),
            salary: 5000.0,
            age: 30,
            ..Default::default()
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["age"], 30);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let employee: Employee = serde_json::from_str(r#"{"name":"Bo"}"#).unwrap();
        assert_eq!(employee.name, "Bo");
        assert_eq!(employee.age, 0);
        assert_eq!(employee.salary, 0.0);
        assert!(employee.id.is_empty());
    }

    #[test]
    fn test_record_discards_client_id() {
        let employee = Employee {
            id: "x".to_string(),
            name: "Ana".to_string(),
            salary: 1.5,
            age: 2,
        };

        let record = EmployeeRecord::from(employee);
        assert!(record.id.is_none());
        assert_eq!(record.name, "Ana");
    }

    #[test]
    fn test_record_to_employee_uses_hex_id() {
        let oid = ObjectId::new();
        let record = EmployeeRecord {
            id: Some(oid),
            name: "Cy".to_string(),
            salary: 10.0,
            age: 40,
        };

        let employee = Employee::from(record);
        assert_eq!(employee.id, oid.to_hex());
        assert_eq!(employee.id.len(), 24);
    }

    #[test]
    fn test_record_with_missing_fields_decodes_as_zero() {
        let oid = ObjectId::new();
        let record: EmployeeRecord =
            mongodb::bson::from_document(doc! { "_id": oid, "name": "Ana" }).unwrap();

        assert_eq!(record.id, Some(oid));
        assert_eq!(record.name, "Ana");
        assert_eq!(record.salary, 0.0);
        assert_eq!(record.age, 0);

        let bare: EmployeeRecord = mongodb::bson::from_document(doc! { "_id": oid }).unwrap();
        assert!(bare.name.is_empty());
    }

    #[test]
    fn test_record_accepts_int32_numbers() {
        let record: EmployeeRecord = mongodb::bson::from_document(
            doc! { "_id": ObjectId::new(), "name": "Bo", "salary": 5000_i32, "age": 30_i32 },
        )
        .unwrap();

        assert_eq!(record.salary, 5000.0);
        assert_eq!(record.age, 30);
    }

    #[test]
    fn test_parse_employee_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_employee_id(&oid.to_hex()).unwrap(), oid);

        for bad in ["", "not-an-id", "abc", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert!(matches!(
                parse_employee_id(bad),
                Err(Error::InvalidId(_))
            ));
        }
    }
}
