//! Unit tests for domain entities

mod registration_tests;
