//! Workspace-level integration tests for statusdash live under `tests/`.
