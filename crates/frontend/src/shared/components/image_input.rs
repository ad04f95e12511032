use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::form_data::{pick_images, selected_files, PickedImage};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

/// Single-image file input with preview.
///
/// Refused files (not an image, too large) are reported as toasts and leave
/// the previous choice in place.
#[component]
pub fn ImageInput(
    picked: RwSignal<Option<PickedImage>, LocalStorage>,

    /// Image already stored for the record, shown until a new one is picked
    #[prop(optional, into)]
    current: MaybeProp<String>,
) -> impl IntoView {
    let toast = use_toast();
    let max_upload = use_config().max_upload_bytes;

    let on_change = move |ev: web_sys::Event| {
        let (accepted, refused) = pick_images(selected_files(&ev), max_upload);
        for reason in refused {
            toast.error(reason);
        }
        if let Some(image) = accepted.into_iter().next() {
            picked.update(|slot| {
                if let Some(old) = slot.replace(image) {
                    old.release();
                }
            });
        }
    };

    on_cleanup(move || {
        if let Some(Some(image)) = picked.try_get_untracked() {
            image.release();
        }
    });

    let preview = move || {
        picked
            .with(|p| p.as_ref().map(|image| image.preview.clone()))
            .or_else(|| current.get().filter(|url| !url.is_empty()))
    };

    view! {
        <div class="image-input">
            {move || match preview() {
                Some(url) => view! { <img class="image-input__preview" src=url alt="Preview" /> }.into_any(),
                None => view! { <div class="image-input__preview image-input__preview--empty">{icon("image")}</div> }.into_any(),
            }}
            <input type="file" accept="image/*" on:change=on_change />
        </div>
    }
}
