//! Remote image editing.
//!
//! [`EditClient`] talks to the DashScope multimodal generation service.
//! Callers that want to swap the backend (or fake it) depend on the
//! [`ImageEditor`] trait instead.

mod client;
pub mod data_uri;
mod notify;
pub mod protocol;

use async_trait::async_trait;
use imageshelf_common::Result;

pub use client::EditClient;
pub use notify::{Notifier, TracingNotifier};

/// An image-editing backend.
#[async_trait]
pub trait ImageEditor: Send + Sync {
    /// Ask the backend to edit `image` according to `prompt`.
    ///
    /// Returns the edited image exactly as the backend encoded it (a URL or
    /// a `data:` URI); pass it to [`ImageEditor::decode`] for the bytes.
    async fn request_edit(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
        negative_prompt: &str,
        api_key: &str,
    ) -> Result<String>;

    /// Resolve an encoded image returned by [`ImageEditor::request_edit`].
    async fn decode(&self, encoded: &str) -> Result<Vec<u8>>;
}
