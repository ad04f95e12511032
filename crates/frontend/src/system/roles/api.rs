use contracts::domain::common::EntityId;
use contracts::system::roles::{CreateRoleDto, Role, RolesResponse};

use crate::shared::api_client::{Ack, ApiClient, ApiError};

const BASE: &str = "/roles";

pub async fn fetch_roles(client: &ApiClient) -> Result<Vec<Role>, ApiError> {
    let response: RolesResponse = client.get(BASE).await?;
    Ok(response.into_roles())
}

pub async fn create_role(client: &ApiClient, dto: &CreateRoleDto) -> Result<Ack, ApiError> {
    client.post_json(BASE, dto).await
}

pub async fn delete_role(client: &ApiClient, id: EntityId) -> Result<Ack, ApiError> {
    client.delete(&format!("{}/{}", BASE, id)).await
}
