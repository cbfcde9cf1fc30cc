use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{CorrectionConfig, DEFAULT_MAX_EDIT_DISTANCE};
use crate::domain::SummaryConfig;
use crate::infrastructure::ocr::TesseractOptions;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub correction: CorrectionSettings,
    pub summarization: SummarizationSettings,
    pub ocr: OcrSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// `.env`, then `appsettings.{environment}` (optional), then `APP__*`
    /// environment variables, e.g. `APP__SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorrectionSettings {
    pub max_edit_distance: usize,
    pub word_list_path: Option<String>,
    pub frequency_corpus_path: Option<String>,
    pub stopwords_path: Option<String>,
    pub enable_tokenizer: bool,
    pub enable_tagger: bool,
}

impl Default for CorrectionSettings {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            word_list_path: None,
            frequency_corpus_path: None,
            stopwords_path: None,
            enable_tokenizer: true,
            enable_tagger: true,
        }
    }
}

impl From<&CorrectionSettings> for CorrectionConfig {
    fn from(settings: &CorrectionSettings) -> Self {
        Self {
            max_edit_distance: settings.max_edit_distance,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerBackend {
    #[default]
    None,
    Http,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizationSettings {
    pub enabled: bool,
    pub backend: SummarizerBackend,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub max_words_per_chunk: usize,
    pub max_chunks: usize,
    pub trim_word_budget: Option<usize>,
    pub batch_size: usize,
    pub min_summary_length: usize,
    pub max_summary_length: usize,
    pub allow_refine: bool,
    pub num_beams: usize,
    pub request_timeout_secs: u64,
}

impl Default for SummarizationSettings {
    fn default() -> Self {
        let defaults = SummaryConfig::default();
        Self {
            enabled: true,
            backend: SummarizerBackend::default(),
            endpoint: None,
            api_key: None,
            max_words_per_chunk: defaults.max_words_per_chunk,
            max_chunks: defaults.max_chunks,
            trim_word_budget: defaults.trim_word_budget,
            batch_size: defaults.batch_size,
            min_summary_length: defaults.min_summary_length,
            max_summary_length: defaults.max_summary_length,
            allow_refine: defaults.allow_refine,
            num_beams: defaults.num_beams,
            request_timeout_secs: 120,
        }
    }
}

impl From<&SummarizationSettings> for SummaryConfig {
    fn from(settings: &SummarizationSettings) -> Self {
        Self {
            max_words_per_chunk: settings.max_words_per_chunk,
            max_chunks: settings.max_chunks,
            trim_word_budget: settings.trim_word_budget,
            batch_size: settings.batch_size,
            min_summary_length: settings.min_summary_length,
            max_summary_length: settings.max_summary_length,
            allow_refine: settings.allow_refine,
            num_beams: settings.num_beams,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    pub tesseract_path: String,
    pub language: String,
    pub page_segmentation_mode: u8,
    pub engine_mode: u8,
}

impl Default for OcrSettings {
    fn default() -> Self {
        let defaults = TesseractOptions::default();
        Self {
            tesseract_path: defaults.binary_path,
            language: defaults.language,
            page_segmentation_mode: defaults.page_segmentation_mode,
            engine_mode: defaults.engine_mode,
        }
    }
}

impl From<&OcrSettings> for TesseractOptions {
    fn from(settings: &OcrSettings) -> Self {
        Self {
            binary_path: settings.tesseract_path.clone(),
            language: settings.language.clone(),
            page_segmentation_mode: settings.page_segmentation_mode,
            engine_mode: settings.engine_mode,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
}
