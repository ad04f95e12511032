use contracts::domain::a003_client::aggregate::Client;
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{PageResponse, Paginated};
use web_sys::FormData;

use crate::shared::api_client::{Ack, ApiClient, ApiError, Record};
use crate::shared::list_loader::ListQuery;

const BASE: &str = "/clients";

pub async fn fetch_page(client: &ApiClient, query: &ListQuery) -> Result<Paginated<Client>, ApiError> {
    let response: PageResponse<Client> = client.get_with(BASE, &query.list_params()).await?;
    Ok(response.into_page())
}

pub async fn fetch_client(client: &ApiClient, id: EntityId) -> Result<Client, ApiError> {
    let record: Record<Client> = client.get(&format!("{}/{}", BASE, id)).await?;
    Ok(record.into_inner())
}

pub async fn create_client(client: &ApiClient, form: FormData) -> Result<Ack, ApiError> {
    client.post_form(BASE, form).await
}

/// `form` must carry `_method=PUT`.
pub async fn update_client(client: &ApiClient, id: EntityId, form: FormData) -> Result<Ack, ApiError> {
    client.post_form(&format!("{}/{}", BASE, id), form).await
}
