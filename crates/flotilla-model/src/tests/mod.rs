//! Unit tests for the `flotilla_model` types.

#![expect(clippy::expect_used, reason = "tests fail loudly on fixture errors")]
