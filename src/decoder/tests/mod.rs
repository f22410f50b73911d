//! Unit tests for the decoder layers

mod guard_tests;
