mod pdf_oxide_page_source;

pub use pdf_oxide_page_source::PdfOxidePageSource;
