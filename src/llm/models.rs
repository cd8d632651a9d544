// Central registry of model identifiers served by the completion API.
// Grouped by category; the first "text" entry is the default for commit messages.
// Identifiers follow `provider-{number}/{model_name}`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    Reasoning,
    Text,
    Image,
    Embedding,
}

impl ModelCategory {
    pub const ALL: [ModelCategory; 4] = [
        ModelCategory::Reasoning,
        ModelCategory::Text,
        ModelCategory::Image,
        ModelCategory::Embedding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Reasoning => "reasoning",
            ModelCategory::Text => "text",
            ModelCategory::Image => "image",
            ModelCategory::Embedding => "embedding",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reasoning" => Ok(ModelCategory::Reasoning),
            "text" => Ok(ModelCategory::Text),
            "image" => Ok(ModelCategory::Image),
            "embedding" => Ok(ModelCategory::Embedding),
            other => Err(format!("Unknown model category: {}", other)),
        }
    }
}

const REASONING_MODELS: &[&str] = &[
    "provider-1/deepseek-r1-distill-llama-8b",
    "provider-1/deepseek-r1-distill-qwen-1.5b",
    "provider-3/deepseek-v3",
    "provider-3/deepseek-v3-0324",
    "provider-1/deepseek-v3.1-turbo",
];

const TEXT_MODELS: &[&str] = &[
    "provider-3/llama-3.3-70b",
    "provider-3/gpt-4o-mini",
    "provider-3/gpt-4.1-nano",
    "provider-3/qwen-2.5-72b",
    "provider-3/gpt-5-nano",
];

// Not usable for commit messages, listed for completeness
const IMAGE_MODELS: &[&str] = &[
    "provider-4/imagen-3",
    "provider-4/imagen-4",
    "provider-4/qwen-image",
];

const EMBEDDING_MODELS: &[&str] = &[
    "provider-6/qwen3-embedding-4b",
    "provider-6/cliptagger-12b",
];

/// Read-only catalog of known model identifiers
#[derive(Debug, Clone, Copy)]
pub struct ModelRegistry {
    _private: (),
}

static BUILTIN: ModelRegistry = ModelRegistry { _private: () };

impl ModelRegistry {
    pub fn builtin() -> &'static ModelRegistry {
        &BUILTIN
    }

    pub fn models(&self, category: ModelCategory) -> &'static [&'static str] {
        match category {
            ModelCategory::Reasoning => REASONING_MODELS,
            ModelCategory::Text => TEXT_MODELS,
            ModelCategory::Image => IMAGE_MODELS,
            ModelCategory::Embedding => EMBEDDING_MODELS,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (ModelCategory, &'static [&'static str])> + '_ {
        ModelCategory::ALL
            .into_iter()
            .map(move |category| (category, self.models(category)))
    }

    /// Model used when the caller does not pick one
    pub fn default_model(&self) -> &'static str {
        TEXT_MODELS[0]
    }

    pub fn category_of(&self, model: &str) -> Option<ModelCategory> {
        self.categories()
            .find(|(_, models)| models.contains(&model))
            .map(|(category, _)| category)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.category_of(model).is_some()
    }
}
