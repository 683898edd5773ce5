pub mod global_tests;
pub mod settings_tests;
