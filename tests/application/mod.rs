mod chunk_planner_test;
mod content_analyzer_test;
mod simple_corrector_test;
mod text_cleaner_test;
