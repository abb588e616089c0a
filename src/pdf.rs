//! Admit Card PDF
//!
//! Renders the admit card preview as a single A4 page of fixed-position
//! text lines, returned as raw bytes for the download helper.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::models::AdmitCardData;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;

/// Y position measured from the top of the page
fn from_top(mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - mm)
}

/// Render one admit card as PDF bytes
pub fn render_admit_card(card: &AdmitCardData) -> Result<Vec<u8>, String> {
    let (doc, page, layer) = PdfDocument::new(
        "Admit Card",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| e.to_string())?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| e.to_string())?;

    layer.use_text(
        "Internal Examinations - Admit Card",
        16.0,
        Mm(LEFT_MARGIN_MM),
        from_top(20.0),
        &bold,
    );

    let lines = [
        format!("Name: {}", card.name),
        format!("Registration No: {}", card.reg_no),
        format!("Program: {}", card.program),
        format!("Subject: {} - {}", card.subject, card.subject_name),
        format!("Exam Date: {}", card.exam_date),
        format!("Semester: {}", card.semester),
    ];
    let mut y = 40.0;
    for line in &lines {
        layer.use_text(line.as_str(), 12.0, Mm(LEFT_MARGIN_MM), from_top(y), &regular);
        y += 10.0;
    }

    doc.save_to_bytes().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> AdmitCardData {
        AdmitCardData {
            name: "Ayush Gupta".to_string(),
            reg_no: "RA241103003034".to_string(),
            program: "B.Tech - CSE - CS/A".to_string(),
            subject: "CS301".to_string(),
            subject_name: "Operating Systems".to_string(),
            exam_date: "2025-09-05".to_string(),
            semester: 3,
        }
    }

    #[test]
    fn renders_valid_pdf_bytes() {
        let bytes = render_admit_card(&sample_card()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn pdf_uses_builtin_fonts() {
        let bytes = render_admit_card(&sample_card()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        // Font dictionaries are never compressed, unlike content streams.
        assert!(text.contains("Helvetica"));
    }
}
