//! Common test utilities and fixtures for integration tests.
//!
//! The router has no external dependencies, so every test builds its own
//! in-process server.

pub mod fixtures;

use axum_test::TestServer;

use cloze_anything_backend::build_router;

/// Test context wrapping an in-process server.
pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    /// Create a new test context.
    pub fn new() -> Self {
        let server = TestServer::new(build_router()).expect("Failed to start test server");
        Self { server }
    }
}
