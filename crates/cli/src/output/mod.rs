// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for extraction results and keyword listings.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Show input number, span and matched text next to each value.
    pub spans: bool,
}

impl FormatOptions {
    /// Options that include spans.
    pub fn with_spans() -> Self {
        Self { spans: true }
    }
}
