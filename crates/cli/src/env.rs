// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

// --- Format ---

/// Default format string: DURATIFORM_FORMAT (ignored when empty)
pub fn format() -> Option<String> {
    std::env::var("DURATIFORM_FORMAT")
        .ok()
        .filter(|s| !s.is_empty())
}

// --- Logging ---

/// Log filter directives for tracing-subscriber: DURATIFORM_LOG
pub fn log_filter() -> Option<String> {
    std::env::var("DURATIFORM_LOG").ok()
}
