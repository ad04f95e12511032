use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::active_flag::ActiveFlag;
use crate::shared::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default)]
    pub status: ActiveFlag,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Role {
    /// Case-insensitive match on name or description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// `GET /roles` answers either with a bare array or `{ data: [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RolesResponse {
    Bare(Vec<Role>),
    Wrapped { data: Vec<Role> },
}

impl RolesResponse {
    pub fn into_roles(self) -> Vec<Role> {
        match self {
            RolesResponse::Bare(roles) | RolesResponse::Wrapped { data: roles } => roles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoleDto {
    pub name: String,
    pub description: String,
    pub status: ActiveFlag,
}

impl Default for CreateRoleDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: ActiveFlag::ACTIVE,
        }
    }
}

impl CreateRoleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Role Name is required.".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_response_shapes() {
        let bare: RolesResponse = serde_json::from_str(r#"[{"id": 1, "name": "Editor", "status": true}]"#).unwrap();
        let roles = bare.into_roles();
        assert_eq!(roles.len(), 1);
        assert!(roles[0].status.is_active());

        let wrapped: RolesResponse =
            serde_json::from_str(r#"{"data": [{"id": 2, "name": "Viewer", "description": "Read only", "status": 0}]}"#).unwrap();
        let roles = wrapped.into_roles();
        assert!(!roles[0].status.is_active());
        assert!(roles[0].matches("read"));
        assert!(!roles[0].matches("admin"));
    }
}
