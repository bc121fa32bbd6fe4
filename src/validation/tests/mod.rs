//! Unit tests for raw input validation.
