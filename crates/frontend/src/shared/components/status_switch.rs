use leptos::prelude::*;

/// Active/inactive switch driven by the optimistic toggle engine.
///
/// The switch never owns its value; it renders `active` and reports clicks.
/// While `pending` it is disabled so a second click cannot be sent.
#[component]
pub fn StatusSwitch(
    #[prop(into)]
    active: Signal<bool>,

    #[prop(into)]
    pending: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class="status-switch"
            class:status-switch--on=move || active.get()
            class:status-switch--pending=move || pending.get()
            aria-checked=move || active.get().to_string()
            disabled=move || pending.get()
            on:click=move |_| on_toggle.run(())
        >
            <span class="status-switch__thumb"></span>
            <span class="status-switch__label">
                {move || if active.get() { "Active" } else { "Inactive" }}
            </span>
        </button>
    }
}
