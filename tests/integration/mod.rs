//! Integration tests for the REST gateway configuration crate
