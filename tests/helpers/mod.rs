// ABOUTME: Shared helpers for integration tests
// ABOUTME: Re-exports the axum oneshot harness and the fake LLM provider

// Each integration test binary compiles these helpers independently and
// not every binary uses every helper.
#![allow(dead_code)]

pub mod axum_test;
pub mod fake_llm;
