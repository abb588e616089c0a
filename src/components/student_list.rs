//! Student List Component
//!
//! Lists students for a semester and triggers single or bulk admit
//! card downloads. Bulk downloads run strictly one after another.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, event_value};
use crate::models::Student;
use crate::schedule;

#[component]
pub fn StudentList() -> impl IntoView {
    let (semester, set_semester) = signal(String::new());
    let (students, set_students) = signal(Vec::<Student>::new());
    let (loading, set_loading) = signal(false);
    let (downloading, set_downloading) = signal(false);

    // Fetch students when the semester changes
    Effect::new(move |_| {
        let sem = semester.get();
        let Ok(sem) = sem.parse::<u8>() else {
            set_students.set(Vec::new());
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::get_students_by_semester(sem).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!(
                            "[StudentList] Loaded {} students for semester {}",
                            loaded.len(),
                            sem
                        )
                        .into(),
                    );
                    set_students.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[StudentList] Error fetching students: {}", e).into(),
                    );
                    alert("Failed to load students. Please check console for details.");
                }
            }
            set_loading.set(false);
        });
    });

    let download_one = move |student: Student| {
        set_downloading.set(true);
        spawn_local(async move {
            if let Err(e) = api::generate_admit_card(&student).await {
                web_sys::console::error_1(
                    &format!("[StudentList] Admit card for {} failed: {}", student.reg_no, e)
                        .into(),
                );
                alert("Admit card download failed.");
            }
            set_downloading.set(false);
        });
    };

    let download_all = move |_| {
        let list = students.get();
        if list.is_empty() {
            return;
        }
        set_downloading.set(true);
        spawn_local(async move {
            match api::generate_bulk_admit_cards(&list).await {
                Ok(count) => alert(&format!("Downloaded {} admit cards.", count)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[StudentList] Bulk download failed: {}", e).into(),
                    );
                    alert("Bulk download stopped on a failed request.");
                }
            }
            set_downloading.set(false);
        });
    };

    view! {
        <div class="student-list">
            <h3>"Students"</h3>

            <div class="form-group">
                <label>"Semester: "</label>
                <select
                    prop:value=move || semester.get()
                    on:change=move |ev| set_semester.set(event_value(&ev))
                >
                    <option value="">"Select Semester"</option>
                    {schedule::SEMESTERS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || loading.get()>
                <p>"Loading students..."</p>
            </Show>

            <Show when=move || !students.get().is_empty()>
                <table class="student-table">
                    <thead>
                        <tr>
                            <th>"Reg No"</th>
                            <th>"Name"</th>
                            <th>"Course"</th>
                            <th>"Admit Card"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || students.get()
                            key=|student| student.id.clone()
                            children=move |student| {
                                let row_student = student.clone();
                                view! {
                                    <tr>
                                        <td>{student.reg_no.clone()}</td>
                                        <td>{student.student_name.clone()}</td>
                                        <td>{student.course.clone()}</td>
                                        <td>
                                            <button
                                                type="button"
                                                disabled=move || downloading.get()
                                                on:click=move |_| download_one(row_student.clone())
                                            >
                                                "Download"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <button
                    type="button"
                    class="bulk-download-btn"
                    disabled=move || downloading.get()
                    on:click=download_all
                >
                    {move || if downloading.get() { "Downloading..." } else { "Download All" }}
                </button>
            </Show>
        </div>
    }
}
