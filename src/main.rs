use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use ocrclean::application::ports::Summarizer;
use ocrclean::application::services::{
    ContentAnalyzer, CorrectionEngine, DocumentProcessor, ProcessingContext, SummaryOrchestrator,
};
use ocrclean::infrastructure::ocr::TesseractCliEngine;
use ocrclean::infrastructure::observability::{TracingConfig, init_tracing};
use ocrclean::infrastructure::pdf::PdfOxidePageSource;
use ocrclean::infrastructure::summarization::SummarizerFactory;
use ocrclean::infrastructure::text_processing::{
    LexiconPosTagger, UnicodeSentenceTokenizer, UnicodeWordTokenizer,
};
use ocrclean::infrastructure::vocabulary::FileVocabularySource;
use ocrclean::presentation::config::CorrectionSettings;
use ocrclean::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    let tracing_config = TracingConfig::default();
    let json_format = settings.logging.json_format || tracing_config.json_format;
    init_tracing(
        &TracingConfig::new(environment.as_str(), json_format),
        settings.server.port,
    )
    .context("Failed to initialize tracing")?;

    let summarizer = SummarizerFactory::create_or_disabled(&settings.summarization);
    let context = Arc::new(build_context(&settings.correction, summarizer));

    let correction_engine = Arc::new(CorrectionEngine::new(
        Arc::clone(&context),
        (&settings.correction).into(),
    ));
    let summary_orchestrator = Arc::new(SummaryOrchestrator::from_context(
        &context,
        (&settings.summarization).into(),
    ));
    tracing::info!(
        capabilities = ?context.capabilities(),
        summarization = summary_orchestrator.is_available(),
        "Processing context ready"
    );

    let document_processor = Arc::new(DocumentProcessor::new(
        Arc::new(PdfOxidePageSource::new()),
        Arc::new(TesseractCliEngine::new((&settings.ocr).into())),
        Arc::clone(&correction_engine),
        Arc::clone(&summary_orchestrator),
    ));

    let state = AppState {
        content_analyzer: Arc::new(ContentAnalyzer::new(Arc::clone(&context))),
        correction_engine,
        summary_orchestrator,
        document_processor,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn build_context(
    settings: &CorrectionSettings,
    summarizer: Option<Arc<dyn Summarizer>>,
) -> ProcessingContext {
    let mut builder = ProcessingContext::builder().maybe_summarizer(summarizer);

    match &settings.word_list_path {
        Some(path) => {
            let mut source = FileVocabularySource::new(path);
            if let Some(corpus) = &settings.frequency_corpus_path {
                source = source.with_frequency_corpus(corpus);
            }
            if let Some(stopwords) = &settings.stopwords_path {
                source = source.with_stopwords(stopwords);
            }
            builder = builder.load_resources(&source);
        }
        None => tracing::warn!("No word list configured; spell correction disabled"),
    }

    if settings.enable_tokenizer {
        builder = builder
            .sentence_tokenizer(Arc::new(UnicodeSentenceTokenizer::new()))
            .word_tokenizer(Arc::new(UnicodeWordTokenizer::new()));
    }
    if settings.enable_tagger {
        builder = builder.tagger(Arc::new(LexiconPosTagger::new()));
    }

    builder.build()
}
