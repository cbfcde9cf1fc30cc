use ocrclean::application::services::{CorrectionConfig, DEFAULT_MAX_EDIT_DISTANCE};
use ocrclean::domain::SummaryConfig;
use ocrclean::infrastructure::ocr::TesseractOptions;
use ocrclean::presentation::config::{
    CorrectionSettings, Environment, OcrSettings, Settings, SummarizationSettings,
    SummarizerBackend,
};

#[test]
fn given_known_names_when_parsing_environment_then_maps_aliases() {
    assert_eq!(Environment::try_from("dev".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("Development".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from(" production ".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_fails() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_displaying_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::default().as_str(), "local");
}

#[test]
fn given_defaults_when_building_settings_then_server_and_correction_are_sensible() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.correction.max_edit_distance, DEFAULT_MAX_EDIT_DISTANCE);
    assert!(settings.correction.enable_tokenizer);
    assert!(settings.correction.enable_tagger);
    assert!(settings.summarization.enabled);
    assert_eq!(settings.summarization.backend, SummarizerBackend::None);
    assert!(!settings.logging.json_format);
}

#[test]
fn given_default_summarization_settings_when_converting_then_matches_summary_defaults() {
    let config: SummaryConfig = (&SummarizationSettings::default()).into();

    assert_eq!(config, SummaryConfig::default());
}

#[test]
fn given_correction_settings_when_converting_then_carries_edit_distance() {
    let settings = CorrectionSettings {
        max_edit_distance: 1,
        ..CorrectionSettings::default()
    };

    let config: CorrectionConfig = (&settings).into();

    assert_eq!(config.max_edit_distance, 1);
}

#[test]
fn given_ocr_settings_when_converting_then_builds_tesseract_options() {
    let settings = OcrSettings {
        language: "deu".to_string(),
        ..OcrSettings::default()
    };

    let options: TesseractOptions = (&settings).into();

    assert_eq!(options.language, "deu");
    assert_eq!(options.binary_path, "tesseract");
    assert_eq!(options.page_segmentation_mode, 6);
}
