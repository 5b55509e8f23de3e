pub mod config_test;
