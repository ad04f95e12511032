use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::active_flag::ActiveFlag;
use crate::shared::form_fields::FormFields;
use crate::shared::lenient;

/// Client (project partner) with a logo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, alias = "logo")]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub status: ActiveFlag,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Client {
    /// Two-letter placeholder used when there is no logo
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Text part of the create/edit modal; the logo file is attached separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientForm {
    pub name: String,
    pub status: ActiveFlag,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: ActiveFlag::ACTIVE,
        }
    }
}

impl From<&Client> for ClientForm {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            status: client.status,
        }
    }
}

impl ClientForm {
    /// A logo is mandatory on create, optional on edit.
    pub fn validate(&self, logo_required: bool, has_logo: bool) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(if logo_required {
                "Please provide a client name and logo.".to_string()
            } else {
                "Client name is required.".to_string()
            });
        }
        if logo_required && !has_logo {
            return Err("Please provide a client name and logo.".to_string());
        }
        Ok(())
    }

    pub fn to_fields(&self, method: Option<&str>) -> FormFields {
        let mut fields = match method {
            Some(m) => FormFields::with_method(m),
            None => FormFields::new(),
        };
        fields
            .push("name", self.name.trim())
            .push("status", self.status.as_form_value());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_rules() {
        let form = ClientForm {
            name: "Acme".into(),
            status: ActiveFlag::INACTIVE,
        };
        assert!(form.validate(true, false).is_err());
        assert!(form.validate(false, false).is_ok());
        let fields = form.to_fields(Some("PUT"));
        assert_eq!(fields.get("_method"), Some("PUT"));
        assert_eq!(fields.get("status"), Some("0"));
    }

    #[test]
    fn test_logo_alias_and_initials() {
        let c: Client = serde_json::from_str(r#"{"id": 3, "name": "acme", "logo": "a.png", "status": "1"}"#).unwrap();
        assert_eq!(c.logo_path.as_deref(), Some("a.png"));
        assert_eq!(c.initials(), "AC");
    }
}
