mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VARIABLE, Environment};
pub use settings::{
    CorrectionSettings, LoggingSettings, OcrSettings, ServerSettings, Settings,
    SummarizationSettings, SummarizerBackend,
};
