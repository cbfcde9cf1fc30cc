use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Pdf,
    Image,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            m if m.starts_with("image/") => Some(Self::Image),
            _ => None,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" | "png" | "bmp" | "tiff" | "tif" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        Self::from_extension(extension)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMethod {
    HybridPdf,
    ImageOcr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    NativeText,
    OcrText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionBlock {
    pub page: u32,
    pub kind: BlockKind,
    /// 1-based index of the image on its page; `None` for native text.
    pub image: Option<u32>,
    pub raw_content: Option<String>,
    pub content: String,
}

impl ExtractionBlock {
    pub fn native(page: u32, content: String) -> Self {
        Self {
            page,
            kind: BlockKind::NativeText,
            image: None,
            raw_content: None,
            content,
        }
    }

    pub fn ocr(page: u32, image: u32, raw_content: String, content: String) -> Self {
        Self {
            page,
            kind: BlockKind::OcrText,
            image: Some(image),
            raw_content: Some(raw_content),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub processing_method: ProcessingMethod,
    pub extracted_text: String,
    pub raw_text: String,
    pub corrected_text: String,
    pub pages_processed: usize,
    pub images_processed: usize,
    pub processing_time_seconds: f64,
    pub corrections_applied: usize,
    pub blocks: Vec<ExtractionBlock>,
}
