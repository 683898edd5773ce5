pub mod extractor_tests;
