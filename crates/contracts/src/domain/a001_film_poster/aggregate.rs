use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Ordered, Toggleable};
use crate::shared::active_flag::ActiveFlag;
use crate::shared::form_fields::FormFields;
use crate::shared::lenient;

/// Poster type used when a record carries none.
pub const DEFAULT_POSTER_TYPE: &str = "Movie";

// ============================================================================
// Records
// ============================================================================

/// Gallery image attached to a poster design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterImage {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub film_poster_design_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub file_path: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub position: String,
}

/// Film poster design as returned by the list and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmPoster {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub film_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub language: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub genre: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub imdb_rating: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub trailer_link: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub main_image: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default)]
    pub status: ActiveFlag,
    #[serde(default)]
    pub images: Vec<PosterImage>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub position_number: Option<u32>,
    #[serde(rename = "type", default)]
    pub poster_type: Option<String>,
}

impl FilmPoster {
    /// Multipart body for the status switch.
    ///
    /// The update endpoint does not accept sparse updates, so the whole
    /// record is resent with the new status.
    pub fn status_update_fields(&self, status: ActiveFlag) -> FormFields {
        let mut fields = FormFields::with_method("PATCH");
        fields
            .push("status", status.as_form_value())
            .push("film_name", self.film_name.as_str())
            .push("year", self.year.as_str())
            .push("language", self.language.as_str())
            .push("genre", self.genre.as_str())
            .push("imdb_rating", self.imdb_rating.as_str())
            .push(
                "type",
                self.poster_type
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or(DEFAULT_POSTER_TYPE),
            )
            .push_non_empty("description", &self.description)
            .push_non_empty("trailer_link", &self.trailer_link);
        if let Some(position) = self.position_number.filter(|p| *p > 0) {
            fields.push("position_number", position.to_string());
        }
        fields
    }

    /// Image shown first in the gallery: the main image, then the rest.
    pub fn gallery(&self) -> Vec<String> {
        let mut urls = Vec::with_capacity(self.images.len() + 1);
        if !self.main_image.is_empty() {
            urls.push(self.main_image.clone());
        }
        for image in &self.images {
            if !image.file_path.is_empty() && !urls.contains(&image.file_path) {
                urls.push(image.file_path.clone());
            }
        }
        urls
    }
}

impl Toggleable for FilmPoster {
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

/// Compact row used by the sequence manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterListItem {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub film_name: String,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub position_number: u32,
}

impl Ordered for PosterListItem {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> u32 {
        self.position_number
    }

    fn set_position(&mut self, position: u32) {
        self.position_number = position;
    }
}

// ============================================================================
// Requests
// ============================================================================

/// `{id, position_number}` pair of the bulk reorder payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub id: EntityId,
    pub position_number: u32,
}

/// Body of `PUT /film-poster-designs/reorder`.
///
/// Always carries the complete collection; the backend replaces the whole
/// ordering at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderPayload {
    pub positions: Vec<PositionEntry>,
}

impl ReorderPayload {
    /// Build the payload from a list in display order.
    pub fn from_ordered<T: Ordered>(items: &[T]) -> Self {
        Self {
            positions: items
                .iter()
                .enumerate()
                .map(|(index, item)| PositionEntry {
                    id: item.id(),
                    position_number: index as u32 + 1,
                })
                .collect(),
        }
    }
}

/// Body of `DELETE /film-poster-designs/images/bulk-delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteImagesRequest {
    pub image_ids: Vec<EntityId>,
}

/// Query of the paginated listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PosterListParams {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Query of `GET /film-poster-designs/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosterSearchParams {
    pub film_name: String,
}

/// Which image becomes the poster's main image on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainImageChoice {
    /// An image already stored on the backend
    Existing(EntityId),
    /// Index into the newly uploaded files
    New(usize),
}

/// Editable fields of the create/edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterForm {
    pub film_name: String,
    pub year: String,
    pub language: String,
    pub genre: String,
    pub poster_type: String,
    pub status: ActiveFlag,
    pub imdb_rating: String,
    pub trailer_link: String,
    pub description: String,
    pub position_number: String,
}

impl Default for PosterForm {
    fn default() -> Self {
        Self {
            film_name: String::new(),
            year: String::new(),
            language: String::new(),
            genre: String::new(),
            poster_type: DEFAULT_POSTER_TYPE.to_string(),
            status: ActiveFlag::ACTIVE,
            imdb_rating: String::new(),
            trailer_link: String::new(),
            description: String::new(),
            position_number: String::new(),
        }
    }
}

impl From<&FilmPoster> for PosterForm {
    fn from(poster: &FilmPoster) -> Self {
        Self {
            film_name: poster.film_name.clone(),
            year: poster.year.clone(),
            language: poster.language.clone(),
            genre: poster.genre.clone(),
            poster_type: poster
                .poster_type
                .clone()
                .unwrap_or_else(|| DEFAULT_POSTER_TYPE.to_string()),
            status: poster.status,
            imdb_rating: poster.imdb_rating.clone(),
            trailer_link: poster.trailer_link.clone(),
            description: poster.description.clone(),
            position_number: poster
                .position_number
                .map(|p| p.to_string())
                .unwrap_or_default(),
        }
    }
}

impl PosterForm {
    /// Client-side required-field check
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("Film name", &self.film_name),
            ("Year", &self.year),
            ("Language", &self.language),
            ("Genre", &self.genre),
        ];
        if let Some((label, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(format!("{} is required.", label));
        }
        if !self.imdb_rating.trim().is_empty() && self.imdb_rating.trim().parse::<f32>().is_err() {
            return Err("IMDb rating must be a number.".to_string());
        }
        Ok(())
    }

    /// Text parts of the create (`method = None`) or update (`Some("PUT")`)
    /// submission. File parts are attached by the caller.
    pub fn to_fields(&self, method: Option<&str>, main_image: Option<MainImageChoice>) -> FormFields {
        let mut fields = match method {
            Some(m) => FormFields::with_method(m),
            None => FormFields::new(),
        };
        fields
            .push("film_name", self.film_name.trim())
            .push("year", self.year.trim())
            .push("language", self.language.trim())
            .push("genre", self.genre.trim())
            .push("type", self.poster_type.as_str())
            .push("status", self.status.as_form_value())
            .push_non_empty("description", &self.description)
            .push_non_empty("trailer_link", &self.trailer_link)
            .push_non_empty("position_number", &self.position_number);
        if self.imdb_rating.trim().parse::<f32>().is_ok() {
            fields.push("imdb_rating", self.imdb_rating.trim());
        }
        match main_image {
            Some(MainImageChoice::Existing(id)) => {
                fields.push("active_main_image_id", id.to_string());
            }
            Some(MainImageChoice::New(index)) => {
                fields.push("main_image_index", index.to_string());
            }
            None => {}
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poster() -> FilmPoster {
        serde_json::from_str(
            r#"{
                "id": 12,
                "film_name": "Inception",
                "year": 2010,
                "language": "English",
                "genre": "Sci-Fi",
                "imdb_rating": "8.8",
                "trailer_link": "",
                "main_image": "https://cdn.test/main.jpg",
                "description": "Dreams",
                "status": "1",
                "images": [
                    {"id": 1, "film_poster_design_id": 12, "file_path": "https://cdn.test/main.jpg", "position": 1},
                    {"id": 2, "film_poster_design_id": "12", "file_path": "https://cdn.test/b.jpg", "position": "2"}
                ],
                "position_number": "4"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_status_update_resends_full_record() {
        let p = poster();
        let fields = p.status_update_fields(ActiveFlag::INACTIVE);
        assert_eq!(fields.get("_method"), Some("PATCH"));
        assert_eq!(fields.get("status"), Some("0"));
        assert_eq!(fields.get("film_name"), Some("Inception"));
        assert_eq!(fields.get("year"), Some("2010"));
        assert_eq!(fields.get("type"), Some(DEFAULT_POSTER_TYPE));
        assert_eq!(fields.get("description"), Some("Dreams"));
        assert_eq!(fields.get("position_number"), Some("4"));
        assert!(!fields.contains("trailer_link"));
    }

    #[test]
    fn test_gallery_skips_duplicate_main_image() {
        assert_eq!(
            poster().gallery(),
            vec!["https://cdn.test/main.jpg", "https://cdn.test/b.jpg"]
        );
    }

    #[test]
    fn test_reorder_payload_shape() {
        let items = vec![
            PosterListItem { id: 7, film_name: "B".into(), position_number: 9 },
            PosterListItem { id: 3, film_name: "A".into(), position_number: 1 },
        ];
        let json = serde_json::to_value(ReorderPayload::from_ordered(&items)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"positions": [
                {"id": 7, "position_number": 1},
                {"id": 3, "position_number": 2}
            ]})
        );
    }

    #[test]
    fn test_form_validation_and_fields() {
        let mut form = PosterForm::default();
        assert_eq!(form.validate(), Err("Film name is required.".to_string()));

        form = PosterForm::from(&poster());
        form.imdb_rating = "high".into();
        assert!(form.validate().is_err());

        form.imdb_rating = "8.8".into();
        assert!(form.validate().is_ok());
        let fields = form.to_fields(Some("PUT"), Some(MainImageChoice::Existing(2)));
        assert_eq!(fields.get("_method"), Some("PUT"));
        assert_eq!(fields.get("active_main_image_id"), Some("2"));
        assert_eq!(fields.get("imdb_rating"), Some("8.8"));

        let fields = form.to_fields(None, Some(MainImageChoice::New(1)));
        assert!(!fields.contains("_method"));
        assert_eq!(fields.get("main_image_index"), Some("1"));
    }

    #[test]
    fn test_list_params_query() {
        let params = PosterListParams { page: 2, search: None, year: Some("2024".into()) };
        assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!({"page": 2, "year": "2024"}));
    }
}
