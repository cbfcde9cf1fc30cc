use ocrclean::application::ports::{OcrEngine, OcrEngineError, PageSource};
use ocrclean::infrastructure::ocr::{TesseractCliEngine, TesseractOptions};
use ocrclean::infrastructure::pdf::PdfOxidePageSource;

#[tokio::test]
async fn given_missing_tesseract_binary_when_running_ocr_then_reports_unavailable() {
    let engine = TesseractCliEngine::new(TesseractOptions {
        binary_path: "/nonexistent/bin/tesseract".to_string(),
        ..TesseractOptions::default()
    });

    let result = engine.run_ocr(b"not really a png").await;

    assert!(matches!(result, Err(OcrEngineError::Unavailable(_))));
}

#[test]
fn given_default_options_when_building_then_uses_english_block_mode() {
    let options = TesseractOptions::default();

    assert_eq!(options.binary_path, "tesseract");
    assert_eq!(options.language, "eng");
    assert_eq!(options.page_segmentation_mode, 6);
    assert_eq!(options.engine_mode, 3);
}

#[tokio::test]
async fn given_bytes_that_are_not_a_pdf_when_extracting_then_fails() {
    let source = PdfOxidePageSource::new();

    let result = source.extract_pages(b"definitely not a pdf").await;

    assert!(result.is_err());
}

fn two_page_pdf_with_blank_second_page() -> Vec<u8> {
    let stream = "BT /F1 12 Tf 72 720 Td (Hello scanned world) Tj ET";
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R 5 0 R] /Count 2 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 6 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", index + 1).as_bytes());
    }
    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

#[tokio::test]
async fn given_page_without_content_stream_when_extracting_then_other_pages_keep_their_text() {
    let source = PdfOxidePageSource::new();

    let pages = source
        .extract_pages(&two_page_pdf_with_blank_second_page())
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].page_number, 1);
    assert!(pages[0].text.contains("Hello"));
    assert_eq!(pages[1].page_number, 2);
    assert!(pages[1].text.trim().is_empty());
    assert!(pages[1].images.is_empty());
}
