//! Integration tests for Airmouse.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod pipeline_tests;
