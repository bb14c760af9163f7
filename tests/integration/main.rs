//! Workspace-level integration tests
//!
//! End-to-end scenarios crossing both layers: structured-value
//! serialization and map-file persistence.
