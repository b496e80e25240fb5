// ABOUTME: Deterministic prompt construction for recipe generation
// ABOUTME: Lists pantry ingredients verbatim and mandates strict JSON-array output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! Prompt construction for the recipe generation request.
//!
//! The prompt lists the caller's ingredients verbatim, asks for a few
//! creative and easy-to-make recipes, and pins the output to a strict JSON
//! array with exactly the keys `name`, `ingredients`, and `instructions`.
//! An empty array is explicitly permitted, since "no recipes" is a success
//! for callers, not a failure.

/// Build the generation prompt for a non-empty ingredient list.
#[must_use]
pub fn build_prompt(ingredients: &[String]) -> String {
    format!(
        r#"Based on these ingredients: [{}], suggest a few creative and easy-to-make recipes. The recipes must be strictly in the following JSON format. Do not include any other text, explanation, or notes outside of the JSON. If you cannot generate any recipe, return an empty JSON array.

[
  {{
    "name": "...",
    "ingredients": ["...", "..."],
    "instructions": "..."
  }},
  {{
    "name": "...",
    "ingredients": ["...", "..."],
    "instructions": "..."
  }}
]"#,
        ingredients.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_listed_verbatim_comma_joined() {
        let prompt = build_prompt(&["chicken".into(), "Rice".into(), "chicken".into()]);
        assert!(prompt.contains("[chicken, Rice, chicken]"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let ingredients = vec!["egg".to_owned(), "flour".to_owned()];
        assert_eq!(build_prompt(&ingredients), build_prompt(&ingredients));
    }

    #[test]
    fn test_prompt_mandates_json_only_and_permits_empty_array() {
        let prompt = build_prompt(&["egg".into()]);
        assert!(prompt.contains("strictly in the following JSON format"));
        assert!(prompt.contains("Do not include any other text"));
        assert!(prompt.contains("return an empty JSON array"));
        assert!(prompt.contains(r#""name""#));
        assert!(prompt.contains(r#""ingredients""#));
        assert!(prompt.contains(r#""instructions""#));
    }
}
