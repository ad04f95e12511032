use contracts::domain::a001_film_poster::aggregate::{
    BulkDeleteImagesRequest, FilmPoster, PosterListItem, PosterListParams, PosterSearchParams,
    ReorderPayload,
};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{PageResponse, Paginated};
use web_sys::FormData;

use crate::shared::api_client::{Ack, ApiClient, ApiError, Record};
use crate::shared::form_data::to_form_data;
use crate::shared::list_loader::{Endpoint, ListQuery};

const BASE: &str = "/film-poster-designs";

/// One page of posters; a search goes to the search endpoint and comes
/// back as a single page.
pub async fn fetch_page(client: &ApiClient, query: &ListQuery) -> Result<Paginated<FilmPoster>, ApiError> {
    match query.endpoint(true) {
        Endpoint::Search => {
            let params = PosterSearchParams {
                film_name: query.search.clone(),
            };
            let response: PageResponse<FilmPoster> =
                client.get_with(&format!("{}/search", BASE), &params).await?;
            let found = response.into_page().data;
            Ok(Paginated::single_page(filter_by_year(found, query.filter.as_deref())))
        }
        Endpoint::List => {
            let params = PosterListParams {
                page: query.page,
                search: None,
                year: query.filter.clone(),
            };
            let response: PageResponse<FilmPoster> = client.get_with(BASE, &params).await?;
            Ok(response.into_page())
        }
    }
}

/// The search endpoint ignores the year, so the filter is applied here.
pub fn filter_by_year(mut posters: Vec<FilmPoster>, year: Option<&str>) -> Vec<FilmPoster> {
    if let Some(year) = year {
        posters.retain(|p| p.year.trim() == year);
    }
    posters
}

/// Compact list for the sequence manager.
pub async fn fetch_order_list(client: &ApiClient) -> Result<Vec<PosterListItem>, ApiError> {
    let response: PageResponse<PosterListItem> = client.get(&format!("{}/list", BASE)).await?;
    Ok(response.into_page().data)
}

pub async fn fetch_poster(client: &ApiClient, id: EntityId) -> Result<FilmPoster, ApiError> {
    let record: Record<FilmPoster> = client.get(&format!("{}/{}", BASE, id)).await?;
    Ok(record.into_inner())
}

pub async fn create_poster(client: &ApiClient, form: FormData) -> Result<Ack, ApiError> {
    client.post_form(BASE, form).await
}

/// `form` must carry `_method=PUT`.
pub async fn update_poster(client: &ApiClient, id: EntityId, form: FormData) -> Result<Ack, ApiError> {
    client.post_form(&format!("{}/{}", BASE, id), form).await
}

/// Persist the status already applied to `poster`.
pub async fn update_status(client: &ApiClient, poster: &FilmPoster) -> Result<Ack, ApiError> {
    let form = to_form_data(&poster.status_update_fields(poster.status))?;
    client.post_form(&format!("{}/{}", BASE, poster.id), form).await
}

pub async fn delete_poster(client: &ApiClient, id: EntityId) -> Result<Ack, ApiError> {
    client.delete(&format!("{}/{}", BASE, id)).await
}

pub async fn delete_images(client: &ApiClient, image_ids: Vec<EntityId>) -> Result<Ack, ApiError> {
    let body = BulkDeleteImagesRequest { image_ids };
    client
        .delete_json(&format!("{}/images/bulk-delete", BASE), &body)
        .await
}

pub async fn save_order(client: &ApiClient, payload: &ReorderPayload) -> Result<Ack, ApiError> {
    client.put_json(&format!("{}/reorder", BASE), payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poster(id: i64, year: &str) -> FilmPoster {
        serde_json::from_value(serde_json::json!({"id": id, "film_name": "F", "year": year})).unwrap()
    }

    #[test]
    fn test_filter_by_year() {
        let found = vec![poster(1, "2024"), poster(2, "2023"), poster(3, " 2024")];
        let ids: Vec<i64> = filter_by_year(found.clone(), Some("2024")).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filter_by_year(found, None).len(), 3);
    }
}
