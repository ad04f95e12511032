use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::active_flag::ActiveFlag;
use crate::shared::form_fields::FormFields;
use crate::shared::lenient;

/// Employee photo card shown on the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub designation: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub photo: String,
    #[serde(default)]
    pub status: ActiveFlag,
    #[serde(default, deserialize_with = "lenient::string")]
    pub position_number: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Text part of the create form; the photo is attached separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub designation: String,
    pub status: ActiveFlag,
    pub position_number: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            designation: String::new(),
            status: ActiveFlag::ACTIVE,
            position_number: String::new(),
        }
    }
}

impl EmployeeForm {
    pub fn validate(&self, has_photo: bool) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.designation.trim().is_empty()
            || self.position_number.trim().is_empty()
        {
            return Err("Please fill in all required fields.".to_string());
        }
        if self.position_number.trim().parse::<u32>().is_err() {
            return Err("Position number must be a whole number.".to_string());
        }
        if !has_photo {
            return Err("Please upload an employee photo.".to_string());
        }
        Ok(())
    }

    pub fn to_fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields
            .push("name", self.name.trim())
            .push("designation", self.designation.trim())
            .push("status", self.status.as_form_value())
            .push("position_number", self.position_number.trim());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_order() {
        let mut form = EmployeeForm::default();
        assert_eq!(
            form.validate(true),
            Err("Please fill in all required fields.".to_string())
        );
        form.name = "Asha".into();
        form.designation = "Editor".into();
        form.position_number = "x".into();
        assert!(form.validate(true).is_err());
        form.position_number = "3".into();
        assert_eq!(
            form.validate(false),
            Err("Please upload an employee photo.".to_string())
        );
        assert!(form.validate(true).is_ok());
        assert_eq!(form.to_fields().get("status"), Some("1"));
    }

    #[test]
    fn test_decode_numeric_position() {
        let e: Employee = serde_json::from_str(
            r#"{"id": 1, "name": "Asha", "designation": "Editor", "photo": "p.jpg", "status": 1, "position_number": 2}"#,
        )
        .unwrap();
        assert_eq!(e.position_number, "2");
        assert!(e.status.is_active());
    }
}
