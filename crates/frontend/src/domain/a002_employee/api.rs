use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{PageResponse, Paginated};
use web_sys::FormData;

use crate::shared::api_client::{Ack, ApiClient, ApiError};
use crate::shared::list_loader::ListQuery;

const BASE: &str = "/employee-photos";

pub async fn fetch_page(client: &ApiClient, query: &ListQuery) -> Result<Paginated<Employee>, ApiError> {
    let response: PageResponse<Employee> = client.get_with(BASE, &query.list_params()).await?;
    Ok(response.into_page())
}

pub async fn create_employee(client: &ApiClient, form: FormData) -> Result<Ack, ApiError> {
    client.post_form(BASE, form).await
}

pub async fn delete_employee(client: &ApiClient, id: EntityId) -> Result<Ack, ApiError> {
    client.delete(&format!("{}/{}", BASE, id)).await
}
