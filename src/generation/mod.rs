// ABOUTME: Recipe generation service orchestrating prompt, model call, and validation
// ABOUTME: Single-shot pipeline with an all-or-nothing result and typed failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! # Recipe Generation Service
//!
//! [`RecipeGenerator`] accepts pantry ingredients, prompts the configured
//! generative model for recipe suggestions, sanitizes the free-text
//! response, validates its gross structure, and decodes it into
//! [`RecipeSuggestion`] values.
//!
//! The pipeline is stateless: each call makes exactly one outbound model
//! request, mutates nothing locally, and either returns the full decoded
//! sequence or a typed error. Concurrent calls share no mutable state.

pub mod prompt;
pub mod sanitize;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm::{CompletionRequest, LlmProvider};
use crate::models::RecipeSuggestion;

/// Recipe generation service over an injected LLM provider.
///
/// The provider is passed in at construction so tests can substitute a
/// deterministic fake backend.
pub struct RecipeGenerator {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
}

impl RecipeGenerator {
    /// Create a generator using the provider's default model
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            model: None,
        }
    }

    /// Override the model used for generation requests
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Generate recipe suggestions from a pantry ingredient list.
    ///
    /// An empty result is success: the model found no recipe for these
    /// ingredients.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when `ingredients` is empty; no external call is made.
    /// - `ExternalServiceError` / `ExternalAuthFailed` / `ExternalRateLimited`
    ///   when the provider call fails.
    /// - `InvalidFormat` when the response fails the array-delimiter check or
    ///   JSON decode.
    pub async fn generate(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSuggestion>, AppError> {
        if ingredients.is_empty() {
            return Err(AppError::invalid_input("No ingredients provided"));
        }

        info!(count = ingredients.len(), "Generating recipes from pantry ingredients");

        let mut request = CompletionRequest::new(prompt::build_prompt(ingredients));
        if let Some(model) = &self.model {
            request = request.with_model(model);
        }

        let response = self.provider.complete(&request).await?;

        debug!(model = %response.model, "Raw model response received");

        let sanitized = sanitize::strip_code_fences(&response.content);
        sanitize::check_array_delimiters(&sanitized)?;

        let recipes: Vec<RecipeSuggestion> =
            serde_json::from_str(&sanitized).map_err(|e| {
                warn!(error = %e, "Model returned syntactically invalid JSON");
                AppError::invalid_format(format!("Could not parse model response: {e}"))
            })?;

        info!(recipes = recipes.len(), "Recipe generation succeeded");
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;
    use crate::llm::CompletionResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fake provider returning a canned response and counting calls
    struct CannedProvider {
        response: Result<String, ErrorCode>,
        calls: AtomicUsize,
    }

    impl CannedProvider {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_owned()),
                calls: AtomicUsize::new(0),
            }
        }

        fn err(code: ErrorCode) -> Self {
            Self {
                response: Err(code),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn display_name(&self) -> &'static str {
            "Canned Test Provider"
        }

        fn default_model(&self) -> &str {
            "canned-1"
        }

        fn available_models(&self) -> &'static [&'static str] {
            &["canned-1"]
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(CompletionResponse {
                    content: text.clone(),
                    model: "canned-1".to_owned(),
                    usage: None,
                    finish_reason: Some("stop".to_owned()),
                }),
                Err(code) => Err(AppError::new(*code, "canned failure")),
            }
        }

        async fn health_check(&self) -> Result<bool, AppError> {
            Ok(true)
        }
    }

    fn ingredients(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[tokio::test]
    async fn test_empty_input_rejected_before_any_call() {
        let provider = Arc::new(CannedProvider::ok("[]"));
        let generator = RecipeGenerator::new(provider.clone());

        let err = generator.generate(&[]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "No ingredients provided");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fenced_empty_array_is_success_with_zero_recipes() {
        let provider = Arc::new(CannedProvider::ok("```json\n[]\n```"));
        let generator = RecipeGenerator::new(provider.clone());

        let recipes = generator
            .generate(&ingredients(&["chicken", "rice"]))
            .await
            .unwrap();
        assert!(recipes.is_empty());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fenced_array_round_trips_to_unfenced_decode() {
        let body =
            r#"[{"name":"Tomato Soup","ingredients":["tomato","salt"],"instructions":"Boil and blend."}]"#;
        let provider = Arc::new(CannedProvider::ok(&format!("```json\n{body}\n```")));
        let generator = RecipeGenerator::new(provider);

        let recipes = generator.generate(&ingredients(&["tomato"])).await.unwrap();
        let expected: Vec<RecipeSuggestion> = serde_json::from_str(body).unwrap();
        assert_eq!(recipes, expected);
    }

    #[tokio::test]
    async fn test_leading_prose_is_malformed() {
        let provider = Arc::new(CannedProvider::ok("Sure, here are some recipes: [...]"));
        let generator = RecipeGenerator::new(provider);

        let err = generator.generate(&ingredients(&["egg"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn test_bracket_passing_invalid_json_is_malformed() {
        let provider = Arc::new(CannedProvider::ok("[{name: Soup}]"));
        let generator = RecipeGenerator::new(provider);

        let err = generator.generate(&ingredients(&["egg"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn test_element_with_missing_fields_is_malformed() {
        // serde enforces the per-element shape, so a well-bracketed array
        // with incomplete elements still fails as malformed.
        let provider = Arc::new(CannedProvider::ok(r#"[{"name":"Soup"}]"#));
        let generator = RecipeGenerator::new(provider);

        let err = generator.generate(&ingredients(&["egg"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn test_overload_error_distinguishable_from_generic_failure() {
        let provider = Arc::new(CannedProvider::err(ErrorCode::ExternalRateLimited));
        let generator = RecipeGenerator::new(provider);

        let err = generator.generate(&ingredients(&["egg"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ExternalRateLimited);

        let provider = Arc::new(CannedProvider::err(ErrorCode::ExternalServiceError));
        let generator = RecipeGenerator::new(provider);
        let err = generator.generate(&ingredients(&["egg"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
    }

    #[tokio::test]
    async fn test_model_override_is_forwarded() {
        let provider = Arc::new(CannedProvider::ok("[]"));
        let generator = RecipeGenerator::new(provider).with_model("canned-1");
        assert!(generator.generate(&ingredients(&["egg"])).await.is_ok());
    }
}
