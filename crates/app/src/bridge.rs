//! File-backed display bridge.
//!
//! Stands in for the glasses connection on a desktop: every page request is
//! written to `page.json` and every image upload to `<container>.png` in the
//! output directory, so the current display state can be inspected on disk.

use std::path::{Path, PathBuf};

use platform::{DisplayBridge, ImageUpdate, ImageUploadResult, PageLayout, IMAGE_HEIGHT, IMAGE_WIDTH};
use serde::Serialize;
use thiserror::Error;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Page request errors
#[derive(Debug, Error)]
pub enum FileBridgeError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode page layout: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageRequest<'a> {
    request: &'static str,
    container_total: u8,
    #[serde(flatten)]
    layout: &'a PageLayout,
}

/// Writes page layouts and images into a directory.
#[derive(Debug)]
pub struct FileBridge {
    dir: PathBuf,
    pages_written: u64,
    images_written: u64,
}

impl FileBridge {
    /// Bridge writing into `dir`, which is created if missing.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self, FileBridgeError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| FileBridgeError::Io {
                path: dir.clone(),
                source,
            })?;
        Ok(Self {
            dir,
            pages_written: 0,
            images_written: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn pages_written(&self) -> u64 {
        self.pages_written
    }

    pub fn images_written(&self) -> u64 {
        self.images_written
    }

    async fn write_page(
        &mut self,
        request: &'static str,
        layout: &PageLayout,
    ) -> Result<(), FileBridgeError> {
        let body = serde_json::to_vec_pretty(&PageRequest {
            request,
            container_total: layout.container_total(),
            layout,
        })?;
        let path = self.dir.join("page.json");
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| FileBridgeError::Io { path, source })?;
        self.pages_written = self.pages_written.saturating_add(1);
        tracing::debug!(request, containers = layout.container_total(), "page written");
        Ok(())
    }
}

impl DisplayBridge for FileBridge {
    type Error = FileBridgeError;

    async fn create_startup_page(&mut self, layout: &PageLayout) -> Result<(), Self::Error> {
        self.write_page("createStartUpPage", layout).await
    }

    async fn rebuild_page(&mut self, layout: &PageLayout) -> Result<(), Self::Error> {
        self.write_page("rebuildPage", layout).await
    }

    async fn update_image(&mut self, update: &ImageUpdate<'_>) -> ImageUploadResult {
        if !update.data.starts_with(&PNG_SIGNATURE) {
            return ImageUploadResult::ImageException;
        }
        if png_dimensions(update.data) != Some((IMAGE_WIDTH, IMAGE_HEIGHT)) {
            return ImageUploadResult::SizeInvalid;
        }

        let path = self.dir.join(format!("{}.png", update.container_name));
        match tokio::fs::write(&path, update.data).await {
            Ok(()) => {
                self.images_written = self.images_written.saturating_add(1);
                ImageUploadResult::Success
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "image write failed");
                ImageUploadResult::SendFailed
            }
        }
    }
}

/// Width and height from the IHDR chunk that directly follows the signature.
fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let ihdr = data.get(8..24)?;
    if ihdr.get(4..8)? != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(ihdr.get(8..12)?.try_into().ok()?);
    let height = u32::from_be_bytes(ihdr.get(12..16)?.try_into().ok()?);
    Some((width, height))
}
