//! Exam Scheduling Dashboard
//!
//! The main screen: semester/branch/exam/year/month selectors, subject
//! selection with per-subject date and session assignment, and one
//! create-session request per selected subject on submit.

use std::collections::HashMap;

use chrono::Datelike;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, event_checked, event_value};
use crate::models::{ExamSession, ExamSessionPayload, SlotAssignment, Subject};
use crate::schedule::{self, ScheduleValidation};

#[component]
pub fn Dashboard() -> impl IntoView {
    let current_year = chrono::Utc::now().year();

    let (semester, set_semester) = signal(String::new());
    let (branch, set_branch) = signal(String::from("Cyber Security"));
    let (internal_exam, set_internal_exam) = signal(String::new());
    let (year, set_year) = signal(current_year);
    let (month, set_month) = signal(String::new());
    let (subjects, set_subjects) = signal(Vec::<Subject>::new());
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (assignments, set_assignments) = signal(HashMap::<String, SlotAssignment>::new());
    let (submitting, set_submitting) = signal(false);
    let (sessions, set_sessions) = signal(Vec::<ExamSession>::new());
    let (sessions_reload, set_sessions_reload) = signal(0u32);

    // Fetch the subject catalog when the semester changes.
    // Any semester change resets selection and assignments.
    Effect::new(move |_| {
        let sem = semester.get();
        set_selected.set(Vec::new());
        set_assignments.set(HashMap::new());
        match sem.parse::<u8>() {
            Ok(sem) => {
                spawn_local(async move {
                    match api::get_subjects(sem).await {
                        Ok(loaded) => {
                            web_sys::console::log_1(
                                &format!(
                                    "[Dashboard] Loaded {} subjects for semester {}",
                                    loaded.len(),
                                    sem
                                )
                                .into(),
                            );
                            set_subjects.set(loaded);
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[Dashboard] Error fetching subjects: {}", e).into(),
                            );
                            set_subjects.set(Vec::new());
                        }
                    }
                });
            }
            Err(_) => set_subjects.set(Vec::new()),
        }
    });

    // Scheduled sessions panel, reloaded after every submit or clear
    Effect::new(move |_| {
        let _ = sessions_reload.get();
        spawn_local(async move {
            match api::list_exam_sessions().await {
                Ok(loaded) => set_sessions.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Dashboard] Error fetching sessions: {}", e).into(),
                    );
                }
            }
        });
    });

    let available_dates = Memo::new(move |_| schedule::date_options(year.get(), &month.get()));

    let toggle = move |code: String, checked: bool| {
        let catalog = subjects.get();
        let mut sel = selected.get();
        let mut assigns = assignments.get();
        schedule::toggle_subject(&code, checked, &catalog, &mut sel, &mut assigns);
        set_selected.set(sel);
        set_assignments.set(assigns);
    };

    let set_day = move |code: String, value: String| {
        set_assignments.update(|assigns| {
            if let Some(entry) = assigns.get_mut(&code) {
                entry.day = value.parse().ok();
            }
        });
    };

    let set_session = move |code: String, value: String| {
        set_assignments.update(|assigns| {
            if let Some(entry) = assigns.get_mut(&code) {
                entry.session = if value.is_empty() { None } else { Some(value) };
            }
        });
    };

    let submit_disabled =
        move || submitting.get() || !schedule::can_submit(&selected.get(), &assignments.get());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let sel = selected.get();
        let assigns = assignments.get();
        match schedule::validate_schedule(&sel, &assigns) {
            ScheduleValidation::NothingSelected => {
                alert("Please select at least one subject!");
                return;
            }
            ScheduleValidation::Incomplete(codes) => {
                alert(&format!(
                    "Please select date and session for all subjects! Missing: {}",
                    codes.join(", ")
                ));
                return;
            }
            ScheduleValidation::Ok => {}
        }
        let sem: u8 = match semester.get().parse() {
            Ok(sem) => sem,
            Err(_) => {
                alert("Please select a semester!");
                return;
            }
        };
        let submit_year = year.get();
        let submit_month = month.get();
        set_submitting.set(true);
        spawn_local(async move {
            let mut failed = Vec::new();
            for code in &sel {
                // validate_schedule guarantees a complete entry per code
                let entry = &assigns[code];
                let payload = ExamSessionPayload {
                    subject_code: code.clone(),
                    exam_date: schedule::format_exam_date(
                        submit_year,
                        &submit_month,
                        entry.day.unwrap_or(1),
                    ),
                    exam_time: entry.session.clone().unwrap_or_default(),
                    semester: sem,
                };
                web_sys::console::log_1(
                    &format!(
                        "[Dashboard] Submitting {}",
                        serde_json::to_string(&payload).unwrap_or_default()
                    )
                    .into(),
                );
                if let Err(e) = api::add_exam_session(&payload).await {
                    web_sys::console::error_1(
                        &format!("[Dashboard] Submission for {} failed: {}", code, e).into(),
                    );
                    failed.push(code.clone());
                }
            }
            if failed.is_empty() {
                alert("Exam Session submitted successfully!");
                // Reset like a fresh page load
                set_semester.set(String::new());
                set_internal_exam.set(String::new());
                set_month.set(String::new());
                set_year.set(current_year);
            } else {
                alert(&format!(
                    "{} of {} submissions failed: {}",
                    failed.len(),
                    sel.len(),
                    failed.join(", ")
                ));
            }
            set_sessions_reload.update(|v| *v += 1);
            set_submitting.set(false);
        });
    };

    let clear_sessions = move |_| {
        let sem: u8 = match semester.get().parse() {
            Ok(sem) => sem,
            Err(_) => {
                alert("Select a semester to clear first");
                return;
            }
        };
        spawn_local(async move {
            match api::clear_exam_sessions(sem).await {
                Ok(()) => set_sessions_reload.update(|v| *v += 1),
                Err(e) => alert(&format!("Failed to clear sessions: {}", e)),
            }
        });
    };

    view! {
        <div class="dashboard">
            <form on:submit=handle_submit>
                <div class="selector-row">
                    <div>
                        <label>"Semester: "</label>
                        <select
                            prop:value=move || semester.get()
                            on:change=move |ev| set_semester.set(event_value(&ev))
                            required
                        >
                            <option value="">"Select Semester"</option>
                            {schedule::SEMESTERS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label>"Branch: "</label>
                        <select
                            prop:value=move || branch.get()
                            on:change=move |ev| set_branch.set(event_value(&ev))
                            required
                        >
                            {schedule::BRANCHES.iter().map(|name| view! {
                                <option value=*name>{*name}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label>"Internal Exam: "</label>
                        <select
                            prop:value=move || internal_exam.get()
                            on:change=move |ev| set_internal_exam.set(event_value(&ev))
                            required
                        >
                            <option value="">"Select Internal Exam"</option>
                            {schedule::INTERNAL_EXAMS.iter().map(|name| view! {
                                <option value=*name>{*name}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label>"Year: "</label>
                        <select
                            prop:value=move || year.get().to_string()
                            on:change=move |ev| {
                                if let Ok(y) = event_value(&ev).parse() {
                                    set_year.set(y);
                                }
                            }
                            required
                        >
                            {schedule::year_options(current_year).into_iter().map(|y| view! {
                                <option value=y.to_string()>{y}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label>"Month: "</label>
                        <select
                            prop:value=move || month.get()
                            on:change=move |ev| set_month.set(event_value(&ev))
                            required
                        >
                            <option value="">"Select Month"</option>
                            {schedule::MONTHS.iter().map(|(value, name)| view! {
                                <option value=*value>{*name}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <Show when=move || !subjects.get().is_empty()>
                    <h3>"Select Subjects for Exam"</h3>
                    <div class="subject-list">
                        <For
                            each=move || subjects.get()
                            key=|subject| subject.subject_code.clone()
                            children=move |subject| {
                                let code = subject.subject_code.clone();
                                let code_for_toggle = code.clone();
                                let is_checked = move || selected.get().iter().any(|c| *c == code);
                                view! {
                                    <div class="subject-row">
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=is_checked
                                                on:change=move |ev| {
                                                    toggle(code_for_toggle.clone(), event_checked(&ev));
                                                }
                                            />
                                            {format!("{} - {}", subject.subject_code, subject.subject_name)}
                                        </label>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>

                <Show when=move || !selected.get().is_empty()>
                    <h3>"Exam Schedule for Selected Subjects"</h3>
                    <table class="schedule-table">
                        <thead>
                            <tr>
                                <th>"Subject Code"</th>
                                <th>"Subject Name"</th>
                                <th>"Date"</th>
                                <th>"Session"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || selected.get()
                                key=|code| code.clone()
                                children=move |code| {
                                    let name = {
                                        let code = code.clone();
                                        move || {
                                            subjects.get().iter()
                                                .find(|s| s.subject_code == code)
                                                .map(|s| s.subject_name.clone())
                                                .unwrap_or_default()
                                        }
                                    };
                                    let day_value = {
                                        let code = code.clone();
                                        move || {
                                            assignments.get().get(&code)
                                                .and_then(|a| a.day)
                                                .map(|d| d.to_string())
                                                .unwrap_or_default()
                                        }
                                    };
                                    let session_value = {
                                        let code = code.clone();
                                        move || {
                                            assignments.get().get(&code)
                                                .and_then(|a| a.session.clone())
                                                .unwrap_or_default()
                                        }
                                    };
                                    let code_day = code.clone();
                                    let code_session = code.clone();
                                    view! {
                                        <tr>
                                            <td>{code.clone()}</td>
                                            <td>{name}</td>
                                            <td>
                                                <select
                                                    prop:value=day_value
                                                    on:change=move |ev| set_day(code_day.clone(), event_value(&ev))
                                                    required
                                                >
                                                    <option value="">"Select Date"</option>
                                                    {move || available_dates.get().iter().map(|d| view! {
                                                        <option value=d.to_string()>{*d}</option>
                                                    }).collect_view()}
                                                </select>
                                            </td>
                                            <td>
                                                <select
                                                    prop:value=session_value
                                                    on:change=move |ev| set_session(code_session.clone(), event_value(&ev))
                                                    required
                                                >
                                                    <option value="">"Select Session"</option>
                                                    {schedule::SESSION_SLOTS.iter().map(|(value, label)| view! {
                                                        <option value=*value>{*label}</option>
                                                    }).collect_view()}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>

                <button type="submit" disabled=submit_disabled>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Exam Session" }}
                </button>
            </form>

            <div class="sessions-panel">
                <h3>"Scheduled Sessions"</h3>
                <Show when=move || sessions.get().is_empty()>
                    <p>"No exam sessions scheduled yet."</p>
                </Show>
                <ul>
                    <For
                        each=move || sessions.get()
                        key=|s| format!("{}/{}/{}", s.id, s.subject_code, s.exam_date)
                        children=move |session| view! {
                            <li>
                                {format!(
                                    "{} on {} ({}), semester {}",
                                    session.subject_code,
                                    session.exam_date,
                                    session.exam_time,
                                    session.sem
                                )}
                            </li>
                        }
                    />
                </ul>
                <button type="button" on:click=clear_sessions>
                    "Clear semester sessions"
                </button>
            </div>
        </div>
    }
}
