// ABOUTME: Pure text sanitization and structural validation for model output
// ABOUTME: Strips Markdown code fences and fast-fails non-JSON-array responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! Sanitization of raw generative-model output.
//!
//! Generative models frequently wrap structured output in Markdown code
//! fences despite being told not to. Both functions here are pure: the same
//! input always produces the same output, and stripping already-clean text
//! is a no-op.

use crate::errors::AppError;

/// Fence token with a JSON language tag
const FENCE_JSON: &str = "```json";

/// Bare fence token
const FENCE: &str = "```";

/// Remove every literal code-fence token from `raw` and trim whitespace.
///
/// Tolerates fences appearing zero or more times, at the start, end, or
/// anywhere in between, with or without the `json` language tag. Idempotent.
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(FENCE_JSON, "").replace(FENCE, "").trim().to_owned()
}

/// Validate that sanitized text is grossly shaped like a JSON array.
///
/// The dominant failure mode of free-text models is prose around (or instead
/// of) the requested JSON, so this cheap check runs before any decode
/// attempt. Returns the input unchanged on success.
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the text does not start with `[`
/// or does not end with `]`.
pub fn check_array_delimiters(sanitized: &str) -> Result<&str, AppError> {
    if sanitized.starts_with('[') && sanitized.ends_with(']') {
        Ok(sanitized)
    } else {
        Err(AppError::invalid_format("Model response is not a JSON array"))
    }
}
