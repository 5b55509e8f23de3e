pub mod xss_test;
