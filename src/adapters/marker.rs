//! Last-seen marker persisted as a JSON file

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::domain::entities::Post;
use crate::domain::ports::MarkerStore;
use crate::error::MarkerError;

/// Marker store backed by a single file in the working directory
pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl MarkerStore for FileMarkerStore {
    async fn load(&self) -> Result<Option<Post>, MarkerError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let post = serde_json::from_str(&data)?;
        Ok(Some(post))
    }

    async fn store(&self, post: &Post) -> Result<(), MarkerError> {
        let data = serde_json::to_string(post)?;
        fs::write(&self.path, data).await?;
        Ok(())
    }
}
