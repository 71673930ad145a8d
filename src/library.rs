//! The image library: one store plus one editor.

use std::sync::Arc;

use imageshelf_common::{Error, ImageId, Result};
use imageshelf_db::models::ImageRecord;
use tracing::info;

use crate::config::Config;
use crate::edit::{EditClient, ImageEditor};
use crate::images::{ImageFile, ImageStore};

/// Prefix given to the names of images produced by an edit.
const EDITED_PREFIX: &str = "edited-";

/// Explicitly constructed composite of an [`ImageStore`] and an [`ImageEditor`].
#[derive(Clone)]
pub struct ImageLibrary {
    store: ImageStore,
    editor: Arc<dyn ImageEditor>,
}

impl ImageLibrary {
    pub fn new(store: ImageStore, editor: Arc<dyn ImageEditor>) -> Self {
        Self { store, editor }
    }

    /// Open the configured store and build a DashScope edit client.
    pub fn open(config: &Config) -> Result<Self> {
        let store = ImageStore::open(&config.store.resolved_path(), config.store.pool_size)?;
        let editor = EditClient::new(&config.edit)?;
        Ok(Self::new(store, Arc::new(editor)))
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn editor(&self) -> &dyn ImageEditor {
        self.editor.as_ref()
    }

    /// Edit a stored image and save the result as a new AI-generated record.
    ///
    /// The source record is left untouched.
    pub async fn edit_and_save(
        &self,
        id: &ImageId,
        prompt: &str,
        negative_prompt: &str,
        api_key: &str,
    ) -> Result<ImageRecord> {
        let source = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| Error::invalid_input(format!("No image with id {}", id)))?;

        let encoded = self
            .editor
            .request_edit(&source.blob, &source.mime_type, prompt, negative_prompt, api_key)
            .await?;
        let data = self.editor.decode(&encoded).await?;

        // MIME type left empty: the store sniffs it from the returned bytes
        let file = ImageFile::new(format!("{EDITED_PREFIX}{}", source.name), "", data);
        let record = self.store.save(file, true).await?;

        info!(source = %id, edited = %record.id, "Edited image saved");
        Ok(record)
    }
}
