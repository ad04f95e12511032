use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Toggleable};
use crate::shared::active_flag::ActiveFlag;
use crate::shared::lenient;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country_code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(default = "default_status")]
    pub status: ActiveFlag,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_status() -> ActiveFlag {
    ActiveFlag::ACTIVE
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn phone_display(&self) -> String {
        if self.phone_number.is_empty() {
            return "N/A".to_string();
        }
        format!("{} {}", self.country_code, self.phone_number)
            .trim()
            .to_string()
    }
}

impl Toggleable for User {
    fn id(&self) -> EntityId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status.is_active()
    }

    fn set_active(&mut self, active: bool) {
        self.status = ActiveFlag(active);
    }
}

/// Body of `PUT /users/{id}`; the endpoint expects every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone_number: String,
    pub country_code: String,
    pub country: String,
    pub status: ActiveFlag,
}

impl From<&User> for UpdateUserDto {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            phone_number: user.phone_number.clone(),
            country_code: user.country_code.clone(),
            country: user.country.clone(),
            status: user.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub country_code: String,
    pub phone_number: String,
    pub country: String,
}

impl Default for CreateUserDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: ROLE_USER.to_string(),
            country_code: "+91".to_string(),
            phone_number: String::new(),
            country: "India".to_string(),
        }
    }
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.phone_number.trim().is_empty()
        {
            return Err("Please fill in all required fields.".to_string());
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address.".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_defaults_to_active() {
        let u: User = serde_json::from_str(
            r#"{"id": 5, "name": "Ravi", "email": "r@x.io", "role": "admin", "phone_number": 98765, "country_code": "+91"}"#,
        )
        .unwrap();
        assert!(u.is_active());
        assert!(u.is_admin());
        assert_eq!(u.phone_display(), "+91 98765");
    }

    #[test]
    fn test_update_dto_carries_every_field() {
        let mut u: User = serde_json::from_str(r#"{"id": 1, "name": "A", "email": "a@b.c", "role": "user", "country": "India"}"#).unwrap();
        u.set_active(false);
        let json = serde_json::to_value(UpdateUserDto::from(&u)).unwrap();
        assert_eq!(json["status"], "0");
        assert_eq!(json["country"], "India");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_create_validation() {
        let mut dto = CreateUserDto::default();
        assert!(dto.validate().is_err());
        dto.name = "N".into();
        dto.email = "nobody".into();
        dto.password = "secret".into();
        dto.phone_number = "1".into();
        assert_eq!(dto.validate(), Err("Please enter a valid email address.".to_string()));
        dto.email = "n@b.dev".into();
        assert!(dto.validate().is_ok());
    }
}
