//! Auth Page
//!
//! Login and registration forms behind two tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::{self, LoginArgs, RegisterArgs};
use crate::page::{navigate, Page};
use crate::store::{store_set_token, use_session_store};

const REGISTERED_TEXT: &str = "Registrasi berhasil, silakan login.";

#[derive(Clone, Copy, Debug, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let store = use_session_store();

    let (tab, set_tab) = signal(AuthTab::Login);
    let (message, set_message) = signal(String::new());

    let (login_username, set_login_username) = signal(String::new());
    let (login_password, set_login_password) = signal(String::new());
    let (reg_username, set_reg_username) = signal(String::new());
    let (reg_email, set_reg_email) = signal(String::new());
    let (reg_password, set_reg_password) = signal(String::new());

    // Switching tabs always clears the message line
    let switch_tab = move |next: AuthTab| {
        set_tab.set(next);
        set_message.set(String::new());
    };

    let on_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        let username = login_username.get();
        let password = login_password.get();

        spawn_local(async move {
            let args = LoginArgs { username: &username, password: &password };
            let result = match api::login(&args).await {
                Ok(token) => store_set_token(&store, token),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    log::info!("[AUTH] Logged in as {}", username);
                    navigate(Page::Home);
                }
                Err(e) => {
                    log::warn!("[AUTH] Login failed: {}", e);
                    set_message.set(e.to_string());
                }
            }
        });
    };

    let on_register = move |ev: SubmitEvent| {
        ev.prevent_default();
        let username = reg_username.get();
        let email = reg_email.get();
        let password = reg_password.get();

        spawn_local(async move {
            let args = RegisterArgs { username: &username, email: &email, password: &password };
            match api::register(&args).await {
                Ok(()) => {
                    log::info!("[AUTH] Registered {}", username);
                    switch_tab(AuthTab::Login);
                    set_message.set(REGISTERED_TEXT.to_string());
                }
                Err(e) => {
                    log::warn!("[AUTH] Register failed: {}", e);
                    set_message.set(e.to_string());
                }
            }
        });
    };

    view! {
        <main class="auth-container">
            <h1>"NexForum"</h1>
            <div class="auth-tabs">
                <button
                    id="loginTab"
                    type="button"
                    class="tab"
                    class:active=move || tab.get() == AuthTab::Login
                    on:click=move |_| switch_tab(AuthTab::Login)
                >
                    "Masuk"
                </button>
                <button
                    id="registerTab"
                    type="button"
                    class="tab"
                    class:active=move || tab.get() == AuthTab::Register
                    on:click=move |_| switch_tab(AuthTab::Register)
                >
                    "Daftar"
                </button>
            </div>

            <form
                id="loginForm"
                class="auth-form"
                class:hidden=move || tab.get() != AuthTab::Login
                on:submit=on_login
            >
                <input
                    type="text"
                    name="username"
                    placeholder="Username"
                    required
                    prop:value=move || login_username.get()
                    on:input=move |ev| set_login_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    required
                    prop:value=move || login_password.get()
                    on:input=move |ev| set_login_password.set(event_target_value(&ev))
                />
                <button type="submit">"Masuk"</button>
            </form>

            <form
                id="registerForm"
                class="auth-form"
                class:hidden=move || tab.get() != AuthTab::Register
                on:submit=on_register
            >
                <input
                    type="text"
                    name="username"
                    placeholder="Username"
                    required
                    prop:value=move || reg_username.get()
                    on:input=move |ev| set_reg_username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    required
                    prop:value=move || reg_email.get()
                    on:input=move |ev| set_reg_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    required
                    prop:value=move || reg_password.get()
                    on:input=move |ev| set_reg_password.set(event_target_value(&ev))
                />
                <button type="submit">"Daftar"</button>
            </form>

            <p id="authError" class="error">{move || message.get()}</p>
        </main>
    }
}
