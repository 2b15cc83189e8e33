//! End-to-end tests against a real PostgreSQL started with testcontainers.
//!
//! Docker must be running.

mod helpers;
mod order_test;
mod repository_test;
