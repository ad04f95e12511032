use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::use_api;
use crate::shared::toast::use_toast;
use crate::system::auth::api;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_api();
    let session = use_session();
    let toast = use_toast();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        if email_val.trim().is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Please enter your email and password.".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let client = client.clone();
        spawn_local(async move {
            match api::login(&client, email_val, password_val).await {
                Ok(response) => {
                    let token = response.token.unwrap_or_default();
                    log::info!("signed in");
                    // switches the shell over to the main layout
                    session.sign_in(token, response.user);
                    toast.success("Login successful!");
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    let _ = set_error_message.try_set(Some(api::login_error_message(&e)));
                    let _ = set_is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Film Poster Admin"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
