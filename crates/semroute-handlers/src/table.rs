// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability table keyed by handler id.

use std::collections::HashMap;

use semroute_core::{Handler, SemrouteError};

/// Maps handler ids to executable capabilities.
///
/// The routing core only ever produces a handler id; this table is the
/// boundary where the caller layer turns that id into a response. Handler
/// failures pass through unmodified.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<String, Box<dyn Handler>>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under an id.
    ///
    /// Fails with [`SemrouteError::Config`] if the id is already taken;
    /// capabilities are never silently replaced.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        handler: Box<dyn Handler>,
    ) -> Result<(), SemrouteError> {
        let id = id.into();
        if self.handlers.contains_key(&id) {
            return Err(SemrouteError::Config(format!(
                "handler id `{id}` is already registered"
            )));
        }
        self.handlers.insert(id, handler);
        Ok(())
    }

    /// Execute the handler registered under `id`.
    pub fn execute(&self, id: &str, query: &str) -> Result<String, SemrouteError> {
        let handler = self
            .handlers
            .get(id)
            .ok_or_else(|| SemrouteError::NotFound { id: id.to_string() })?;
        handler.execute(query)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoHandler;

    impl Handler for EchoHandler {
        fn execute(&self, query: &str) -> Result<String, SemrouteError> {
            Ok(format!("echo: {query}"))
        }
    }

    struct FailingHandler;

    impl Handler for FailingHandler {
        fn execute(&self, _query: &str) -> Result<String, SemrouteError> {
            Err(SemrouteError::Handler {
                message: "backend unavailable".to_string(),
                source: None,
            })
        }
    }

    #[test]
    fn execute_dispatches_by_id() {
        let mut table = HandlerTable::new();
        table.register("echo", Box::new(EchoHandler)).unwrap();

        assert_eq!(table.execute("echo", "hi").unwrap(), "echo: hi");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let table = HandlerTable::new();
        let err = table.execute("missing", "hi").expect_err("no handler");
        assert!(matches!(err, SemrouteError::NotFound { .. }));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut table = HandlerTable::new();
        table.register("echo", Box::new(EchoHandler)).unwrap();
        let err = table
            .register("echo", Box::new(EchoHandler))
            .expect_err("duplicate");
        assert!(matches!(err, SemrouteError::Config(_)));
    }

    #[test]
    fn handler_failures_pass_through_unmodified() {
        let mut table = HandlerTable::new();
        table.register("flaky", Box::new(FailingHandler)).unwrap();

        let err = table.execute("flaky", "hi").expect_err("handler error");
        assert!(matches!(err, SemrouteError::Handler { .. }));
        assert!(err.to_string().contains("backend unavailable"));
    }
}
