use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::lenient;

/// Message submitted through the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEnquiry {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email_address: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

