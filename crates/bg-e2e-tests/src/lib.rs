//! End-to-end tests for the blue-green sample app.
//!
//! All tests live in `tests/`. Each one binds the real router to an
//! ephemeral port and talks to it over HTTP with `reqwest`.
