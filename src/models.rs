// ABOUTME: Data structures for generated recipe suggestions
// ABOUTME: Transient per-request values; persistence belongs to the recipe storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! Common data models for the generation service.

use serde::{Deserialize, Serialize};

/// A single recipe suggestion produced by the generative model.
///
/// Instances exist only for the duration of one request/response cycle.
/// Identity, ownership, likes, comments, and timestamps are assigned by the
/// recipe storage backend at persistence time and are out of scope here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    /// Recipe name
    pub name: String,
    /// Ingredients as returned by the model; not cross-validated against
    /// the caller's pantry list
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Estimated cooking time, when the model volunteers one
    #[serde(
        rename = "cookingTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cooking_time: Option<String>,
    /// Difficulty rating, when the model volunteers one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}
