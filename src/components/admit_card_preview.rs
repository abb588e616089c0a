//! Admit Card Preview Component
//!
//! Renders the assembled admit card record and offers a PDF export.

use leptos::prelude::*;

use crate::components::alert;
use crate::context::AppContext;
use crate::download;
use crate::models::AdmitCardData;
use crate::pdf;

#[component]
pub fn AdmitCardPreview(card: AdmitCardData) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let export_card = card.clone();
    let download_pdf = move |_| {
        let result = pdf::render_admit_card(&export_card)
            .and_then(|bytes| download::save_pdf("AdmitCard.pdf", &bytes));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("[AdmitCardPreview] PDF export failed: {}", e).into());
            alert("Could not generate the PDF. Please try again.");
        }
    };

    view! {
        <div class="admit-card-preview">
            <h2>"Admit Card Preview"</h2>
            <p><b>"Name: "</b>{card.name.clone()}</p>
            <p><b>"Reg No: "</b>{card.reg_no.clone()}</p>
            <p><b>"Program: "</b>{card.program.clone()}</p>
            <p><b>"Subject: "</b>{format!("{} - {}", card.subject, card.subject_name)}</p>
            <p><b>"Exam Date: "</b>{card.exam_date.clone()}</p>
            <p><b>"Semester: "</b>{card.semester}</p>
            <div class="preview-actions">
                <button on:click=download_pdf>"Download PDF"</button>
                <button on:click=move |_| ctx.close_preview()>"Back"</button>
            </div>
        </div>
    }
}
