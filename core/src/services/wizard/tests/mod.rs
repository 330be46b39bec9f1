//! Tests for the signup wizard
