//! Admin Login Component
//!
//! Client-side credential and captcha check. This is a stub: the
//! credentials are hardcoded and nothing is verified server-side.

use leptos::prelude::*;

use crate::captcha;
use crate::components::{alert, event_value};
use crate::context::AppContext;

/// Stub credentials, no real access control behind them
const ADMIN_ID: &str = "admin";
const ADMIN_PASSWORD: &str = "1234";

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (admin_id, set_admin_id) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (captcha_input, set_captcha_input) = signal(String::new());
    let (generated, set_generated) = signal(captcha::generate());

    let handle_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if admin_id.get() == ADMIN_ID
            && password.get() == ADMIN_PASSWORD
            && captcha_input.get() == generated.get()
        {
            ctx.login();
        } else {
            alert("Invalid Credentials or Captcha");
            set_generated.set(captcha::generate());
            set_captcha_input.set(String::new());
        }
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-left">
                    <h2>"Exam Portal"</h2>
                    <p>"Admit card admin page. Sign in with admin credentials."</p>
                </div>

                <div class="login-right">
                    <h3 class="portal-header">"Admin Login"</h3>
                    <form class="login-form" on:submit=handle_login>
                        <div class="input-group">
                            <input
                                type="text"
                                placeholder="Admin ID"
                                prop:value=move || admin_id.get()
                                on:input=move |ev| set_admin_id.set(event_value(&ev))
                            />
                        </div>

                        <div class="input-group">
                            <input
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_value(&ev))
                            />
                        </div>

                        <div class="captcha-row">
                            <input
                                type="text"
                                placeholder="Captcha"
                                prop:value=move || captcha_input.get()
                                on:input=move |ev| set_captcha_input.set(event_value(&ev))
                            />
                            <span class="captcha-text">{move || generated.get()}</span>
                            <button
                                type="button"
                                class="captcha-refresh"
                                title="New captcha"
                                on:click=move |_| set_generated.set(captcha::generate())
                            >
                                "↻"
                            </button>
                        </div>

                        <button class="login-btn" type="submit">"Login"</button>
                    </form>
                </div>
            </div>
        </div>
    }
}
