//! Unit tests for Airmouse.
