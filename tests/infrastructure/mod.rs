mod document_adapters_test;
mod file_vocabulary_source_test;
mod http_summarizer_test;
