//! Workspace-level integration tests for the practice programs.
