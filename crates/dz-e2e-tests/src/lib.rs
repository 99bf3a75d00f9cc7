//! End-to-end tests for Diagnoze live under `tests/`.
