use contracts::domain::a004_contact_enquiry::aggregate::ContactEnquiry;
use contracts::shared::pagination::{PageResponse, Paginated};

use crate::shared::api_client::{ApiClient, ApiError};
use crate::shared::list_loader::ListQuery;

/// The answer may be the envelope itself, wrapped under `contact_enquiries`
/// or `data`, or a bare array.
pub async fn fetch_page(client: &ApiClient, query: &ListQuery) -> Result<Paginated<ContactEnquiry>, ApiError> {
    let response: PageResponse<ContactEnquiry> = client
        .get_with("/contact-enquiries", &query.list_params())
        .await?;
    Ok(response.into_page())
}
