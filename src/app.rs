//! Exam Portal Admin App
//!
//! Root component: login gate, admit card preview gate and the
//! Schedule / Admit Cards tab switch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AdmitCardForm, AdmitCardPreview, Dashboard, Login, StudentList};
use crate::context::AppContext;
use crate::models::AdmitCardData;

/// Main view tabs shown after login
#[derive(Clone, Copy, PartialEq)]
enum AdminView {
    Schedule,
    AdmitCards,
}

#[component]
pub fn App() -> impl IntoView {
    let (logged_in, set_logged_in) = signal(false);
    let (admit_card, set_admit_card) = signal::<Option<AdmitCardData>>(None);
    let (current_view, set_current_view) = signal(AdminView::Schedule);
    let (backend_status, set_backend_status) = signal(String::from("checking..."));

    // Provide context to all children
    let ctx = AppContext::new((logged_in, set_logged_in), (admit_card, set_admit_card));
    provide_context(ctx);

    // One-shot backend health probe on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::health_check().await {
                Ok(health) => {
                    web_sys::console::log_1(
                        &format!("[App] Backend health: {}", health.status).into(),
                    );
                    set_backend_status.set(health.status);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[App] Health check failed: {}", e).into());
                    set_backend_status.set("unreachable".to_string());
                }
            }
        });
    });

    let tab_class = move |tab: AdminView| {
        move || {
            if current_view.get() == tab {
                "tab-btn active"
            } else {
                "tab-btn"
            }
        }
    };

    view! {
        <div class="app-layout">
            <Show when=move || !logged_in.get()>
                <Login />
            </Show>

            <Show when=move || logged_in.get()>
                {move || admit_card.get().map(|card| view! { <AdmitCardPreview card=card /> })}

                <Show when=move || admit_card.get().is_none()>
                    <header class="app-header">
                        <h2>"Welcome Admin"</h2>
                        <nav class="view-tabs">
                            <button
                                class=tab_class(AdminView::Schedule)
                                on:click=move |_| set_current_view.set(AdminView::Schedule)
                            >
                                "Exam Schedule"
                            </button>
                            <button
                                class=tab_class(AdminView::AdmitCards)
                                on:click=move |_| set_current_view.set(AdminView::AdmitCards)
                            >
                                "Admit Cards"
                            </button>
                        </nav>
                        <button class="logout-btn" on:click=move |_| ctx.logout()>
                            "Logout"
                        </button>
                    </header>

                    <main class="main-content">
                        <Show when=move || current_view.get() == AdminView::Schedule>
                            <Dashboard />
                        </Show>
                        <Show when=move || current_view.get() == AdminView::AdmitCards>
                            <AdmitCardForm />
                            <StudentList />
                        </Show>
                    </main>

                    <footer class="status-bar">
                        <span>{move || format!("backend: {}", backend_status.get())}</span>
                    </footer>
                </Show>
            </Show>
        </div>
    }
}
