use contracts::domain::common::EntityId;
use contracts::shared::pagination::{PageResponse, Paginated};
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api_client::{Ack, ApiClient, ApiError, Record};
use crate::shared::list_loader::ListQuery;

const BASE: &str = "/users";

pub async fn fetch_page(client: &ApiClient, query: &ListQuery) -> Result<Paginated<User>, ApiError> {
    let response: PageResponse<User> = client.get_with(BASE, &query.list_params()).await?;
    Ok(response.into_page())
}

pub async fn fetch_user(client: &ApiClient, id: EntityId) -> Result<User, ApiError> {
    let record: Record<User> = client.get(&format!("{}/{}", BASE, id)).await?;
    Ok(record.into_inner())
}

pub async fn create_user(client: &ApiClient, dto: &CreateUserDto) -> Result<Ack, ApiError> {
    client.post_json(BASE, dto).await
}

/// Full-record update; also used by the status switch.
pub async fn update_user(client: &ApiClient, id: EntityId, dto: &UpdateUserDto) -> Result<Ack, ApiError> {
    client.put_json(&format!("{}/{}", BASE, id), dto).await
}
