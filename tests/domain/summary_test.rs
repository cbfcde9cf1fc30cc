use ocrclean::domain::{
    GenerationRequest, SummaryConfig, SummaryDiagnostics, SummaryFailure, SummaryRecord,
    SummaryStage, SummaryStrategy,
};

#[test]
fn given_each_failure_when_displayed_then_matches_reason_code() {
    assert_eq!(
        SummaryFailure::SummarizerUnavailable.to_string(),
        "summarizer_unavailable"
    );
    assert_eq!(SummaryFailure::NotEnoughText.to_string(), "not_enough_text");
    assert_eq!(
        SummaryFailure::NoChunksAvailable.to_string(),
        "no_chunks_available"
    );
    assert_eq!(
        SummaryFailure::GenerationError("timeout".to_string()).to_string(),
        "generation_error:timeout"
    );
    assert_eq!(SummaryFailure::EmptySummary.to_string(), "empty_summary");
}

#[test]
fn given_precondition_failures_when_staging_then_are_skips() {
    assert_eq!(
        SummaryFailure::SummarizerUnavailable.stage(),
        SummaryStage::Skipped
    );
    assert_eq!(SummaryFailure::NotEnoughText.stage(), SummaryStage::Skipped);
    assert_eq!(SummaryFailure::EmptySummary.stage(), SummaryStage::Failed);
}

#[test]
fn given_strategies_when_labelled_then_use_snake_case() {
    assert_eq!(SummaryStrategy::None.to_string(), "none");
    assert_eq!(SummaryStrategy::SingleChunk.to_string(), "single_chunk");
    assert_eq!(SummaryStrategy::MultiChunk.to_string(), "multi_chunk");
    assert_eq!(
        SummaryStrategy::MultiChunkRefined.to_string(),
        "multi_chunk_refined"
    );
}

#[test]
fn given_single_chunk_when_building_request_then_batch_size_is_one() {
    let config = SummaryConfig::default();

    let single = GenerationRequest::for_chunks(&config, 1);
    let multi = GenerationRequest::for_chunks(&config, 3);

    assert_eq!(single.batch_size, 1);
    assert_eq!(multi.batch_size, 4);
    assert!(!multi.do_sample);
    assert!(multi.truncation);
    assert!(multi.early_stopping);
}

#[test]
fn given_request_when_refined_then_lengths_grow_by_margin() {
    let request = GenerationRequest::for_chunks(&SummaryConfig::default(), 3);

    let refined = request.refined();

    assert_eq!(refined.max_length, 200);
    assert_eq!(refined.min_length, 60);
    assert_eq!(refined.batch_size, 1);
    assert_eq!(refined.num_beams, request.num_beams);
}

#[test]
fn given_lengths_near_ceiling_when_refined_then_capped_and_ordered() {
    let config = SummaryConfig {
        min_summary_length: 500,
        max_summary_length: 500,
        ..SummaryConfig::default()
    };

    let refined = GenerationRequest::for_chunks(&config, 2).refined();

    assert_eq!(refined.max_length, 512);
    assert!(refined.min_length <= refined.max_length);
}

#[test]
fn given_blank_record_when_reading_text_then_returns_none() {
    assert_eq!(SummaryRecord::default().non_empty_text(), None);
    assert_eq!(SummaryRecord::new("  \n").non_empty_text(), None);
    assert_eq!(SummaryRecord::new(" ok ").non_empty_text(), Some("ok"));
}

#[test]
fn given_diagnostics_when_serialized_then_uses_camel_case_fields() {
    let diagnostics = SummaryDiagnostics {
        trimmed_words: 400,
        ..SummaryDiagnostics::default()
    };

    let json = serde_json::to_value(&diagnostics).unwrap();

    assert_eq!(json["trimmedWords"], 400);
    assert!(json.get("durationSeconds").is_some());
    assert!(json.get("summaryWords").is_some());
    assert_eq!(json["stage"], "not_run");
}
