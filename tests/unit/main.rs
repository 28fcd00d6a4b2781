mod config_tests;
mod layout_tests;
mod perf_target_tests;
mod search_tests;
