mod browse_tests;
mod filter_tests;
mod voice_tests;
