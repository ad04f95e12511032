//! Multipart bodies and file inputs.

use contracts::shared::form_fields::FormFields;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlInputElement};

use crate::shared::api_client::ApiError;

fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("failed to build form data: {:?}", err))
}

/// Browser `FormData` holding the text fields in order.
pub fn to_form_data(fields: &FormFields) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (key, value) in fields.iter() {
        form.append_with_str(key, value).map_err(js_error)?;
    }
    Ok(form)
}

pub fn append_file(form: &FormData, key: &str, file: &File) -> Result<(), ApiError> {
    form.append_with_blob_and_filename(key, file, &file.name())
        .map_err(js_error)
}

/// Files currently selected in the `<input type="file">` behind `ev`.
pub fn selected_files(ev: &web_sys::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Object URL for previewing a picked file.
pub fn preview_url(file: &File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_preview(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// File picked for upload together with its preview URL.
#[derive(Clone)]
pub struct PickedImage {
    pub file: File,
    pub preview: String,
}

impl PickedImage {
    pub fn new(file: File) -> Self {
        let preview = preview_url(&file).unwrap_or_default();
        Self { file, preview }
    }

    pub fn release(&self) {
        if !self.preview.is_empty() {
            revoke_preview(&self.preview);
        }
    }
}

/// Splits a selection into accepted images and the reasons others were
/// refused.
pub fn pick_images(files: Vec<File>, max_bytes: u64) -> (Vec<PickedImage>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut refused = Vec::new();
    for file in files {
        match check_file(&file, max_bytes) {
            Ok(()) => accepted.push(PickedImage::new(file)),
            Err(reason) => refused.push(format!("{}: {}", file.name(), reason)),
        }
    }
    (accepted, refused)
}

/// Checks an upload before it is sent: images only, at most `max_bytes`.
pub fn check_image_upload(mime: &str, size: f64, max_bytes: u64) -> Result<(), String> {
    if !mime.starts_with("image/") {
        return Err("Only image files can be uploaded.".to_string());
    }
    if size > max_bytes as f64 {
        return Err(format!(
            "Image must be smaller than {} MB.",
            max_bytes / (1024 * 1024)
        ));
    }
    Ok(())
}

pub fn check_file(file: &File, max_bytes: u64) -> Result<(), String> {
    check_image_upload(&file.type_(), file.size(), max_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MB: u64 = 2 * 1024 * 1024;

    #[test]
    fn test_upload_rules() {
        assert!(check_image_upload("image/png", 1024.0, TWO_MB).is_ok());
        assert!(check_image_upload("image/jpeg", TWO_MB as f64, TWO_MB).is_ok());
        assert_eq!(
            check_image_upload("image/jpeg", TWO_MB as f64 + 1.0, TWO_MB),
            Err("Image must be smaller than 2 MB.".to_string())
        );
        assert!(check_image_upload("application/pdf", 10.0, TWO_MB).is_err());
    }
}
