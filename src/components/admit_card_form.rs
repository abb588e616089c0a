//! Admit Card Form Component
//!
//! Collects identifying fields plus one subject choice and hands the
//! assembled record to the preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::event_value;
use crate::context::AppContext;
use crate::models::{AdmitCardData, Subject};
use crate::schedule;

// Sample values substituted for blank identity fields. Placeholder
// behavior until student lookup by registration number exists.
const SAMPLE_NAME: &str = "Ayush Gupta";
const SAMPLE_REG_NO: &str = "RA241103003034";
const DEFAULT_PROGRAM: &str = "B.Tech - CSE - CS/A";

#[component]
pub fn AdmitCardForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (semester, set_semester) = signal(String::from("1"));
    let (reg_no, set_reg_no) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (exam_date, set_exam_date) = signal(String::new());
    let (subjects, set_subjects) = signal(Vec::<Subject>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    // Reload the subject options whenever the semester changes
    Effect::new(move |_| {
        let sem = semester.get();
        let Ok(sem) = sem.parse::<u8>() else {
            set_subjects.set(Vec::new());
            return;
        };
        set_loading.set(true);
        set_error.set(String::new());
        set_subject.set(String::new());
        spawn_local(async move {
            match api::get_subjects(sem).await {
                Ok(loaded) => set_subjects.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[AdmitCardForm] Error fetching subjects: {}", e).into(),
                    );
                    set_error.set("Failed to load subjects. Please try again.".to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        if reg_no.get().is_empty() || subject.get().is_empty() || exam_date.get().is_empty() {
            set_error.set("Please fill in all required fields".to_string());
            return;
        }

        let code = subject.get();
        let subject_name = subjects
            .get()
            .iter()
            .find(|s| s.subject_code == code)
            .map(|s| s.subject_name.clone())
            .unwrap_or_default();
        let entered_name = name.get();
        let entered_reg = reg_no.get();

        let card = AdmitCardData {
            name: if entered_name.is_empty() {
                SAMPLE_NAME.to_string()
            } else {
                entered_name
            },
            reg_no: if entered_reg.is_empty() {
                SAMPLE_REG_NO.to_string()
            } else {
                entered_reg
            },
            program: DEFAULT_PROGRAM.to_string(),
            subject: code,
            subject_name,
            exam_date: exam_date.get(),
            semester: semester.get().parse().unwrap_or(1),
        };
        ctx.open_preview(card);
    };

    view! {
        <form class="admit-card-form" on:submit=handle_submit>
            <h3>"Generate Admit Card"</h3>

            <Show when=move || !error.get().is_empty()>
                <div class="error-message">{move || error.get()}</div>
            </Show>

            <div class="form-group">
                <label>"Select Semester:"</label>
                <select
                    prop:value=move || semester.get()
                    on:change=move |ev| set_semester.set(event_value(&ev))
                    required
                >
                    {schedule::SEMESTERS.iter().map(|(value, _)| view! {
                        <option value=*value>{format!("Semester {}", value)}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <input
                    type="text"
                    placeholder="Registration Number *"
                    prop:value=move || reg_no.get()
                    on:input=move |ev| set_reg_no.set(event_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <input
                    type="text"
                    placeholder="Student Name *"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label>"Select Subject *:"</label>
                <Show when=move || loading.get()>
                    <p>"Loading subjects..."</p>
                </Show>
                <Show when=move || !loading.get()>
                    <select
                        prop:value=move || subject.get()
                        on:change=move |ev| set_subject.set(event_value(&ev))
                        required
                    >
                        <option value="">"Select a subject"</option>
                        <For
                            each=move || subjects.get()
                            key=|s| s.subject_code.clone()
                            children=move |s| view! {
                                <option value=s.subject_code.clone()>
                                    {format!("{} - {}", s.subject_code, s.subject_name)}
                                </option>
                            }
                        />
                    </select>
                </Show>
            </div>

            <div class="form-group">
                <label>"Exam Date *:"</label>
                <input
                    type="date"
                    prop:value=move || exam_date.get()
                    on:input=move |ev| set_exam_date.set(event_value(&ev))
                    required
                />
            </div>

            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Loading..." } else { "Preview Admit Card" }}
            </button>

            {move || (!loading.get() && !subjects.get().is_empty()).then(|| view! {
                <p class="subject-count">
                    {format!(
                        "{} subjects available for Semester {}",
                        subjects.get().len(),
                        semester.get()
                    )}
                </p>
            })}
        </form>
    }
}
