//! Wire types for the DashScope multimodal generation endpoint.

use serde::{Deserialize, Serialize};

/// Path of the generation endpoint, relative to the service base URL.
pub const GENERATION_PATH: &str = "/api/v1/services/aigc/multimodal-generation/generation";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub input: GenerationInput<'a>,
    pub parameters: GenerationParameters<'a>,
}

#[derive(Debug, Serialize)]
pub struct GenerationInput<'a> {
    pub messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'static str,
    pub content: Vec<ContentItem<'a>>,
}

/// One content part; serializes as `{"image": ...}` or `{"text": ...}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentItem<'a> {
    Image(&'a str),
    Text(&'a str),
}

#[derive(Debug, Serialize)]
pub struct GenerationParameters<'a> {
    pub negative_prompt: &'a str,
    pub watermark: bool,
}

impl<'a> GenerationRequest<'a> {
    /// Single-turn edit: one user message carrying the image then the instruction.
    pub fn edit(model: &'a str, image: &'a str, prompt: &'a str, negative_prompt: &'a str) -> Self {
        Self {
            model,
            input: GenerationInput {
                messages: vec![Message {
                    role: "user",
                    content: vec![ContentItem::Image(image), ContentItem::Text(prompt)],
                }],
            },
            parameters: GenerationParameters {
                negative_prompt,
                watermark: false,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Successful response body. Every level is optional so that a structurally
/// thin answer reads as "no image" instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub output: Option<GenerationOutput>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerationOutput {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Vec<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub image: Option<String>,
}

impl GenerationResponse {
    /// The first non-empty image payload in the first choice.
    pub fn first_image(&self) -> Option<&str> {
        self.output
            .as_ref()?
            .choices
            .first()?
            .message
            .content
            .iter()
            .find_map(|item| item.image.as_deref().filter(|image| !image.is_empty()))
    }
}
