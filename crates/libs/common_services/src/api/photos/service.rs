use crate::api::photos::error::PhotosError;
use crate::api::photos::interfaces::{UploadOutcome, UploadSummary};
use crate::database::PhotoStore;
use crate::database::tables::photo::{CreatePhoto, Photo};
use crate::storage::MediaStore;
use image_transforms::encode_base64;
use sqlx::PgPool;
use std::path::Path;
use tokio::task;
use tracing::{info, warn};
use uuid::Uuid;

/// One file of an upload request.
#[derive(Debug)]
pub struct UploadFile {
    pub filename: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Stores a batch of uploads, accumulating per-item outcomes instead of
/// failing the whole batch on one bad file.
pub async fn upload_photos(
    pool: &PgPool,
    media: &MediaStore,
    files: Vec<UploadFile>,
) -> UploadSummary {
    let mut summary = UploadSummary::default();
    for file in files {
        let filename = file.filename.clone();
        match store_photo(pool, media, file).await {
            Ok(photo) => {
                summary.succeeded += 1;
                summary.outcomes.push(UploadOutcome {
                    filename,
                    id: Some(photo.id),
                    error: None,
                });
            }
            Err(e) => {
                warn!(%filename, "upload failed: {e:?}");
                summary.failed += 1;
                summary.outcomes.push(UploadOutcome {
                    filename,
                    id: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "bulk upload finished"
    );
    summary
}

/// Stores one uploaded photo: derives the thumbnail and carousel variants,
/// writes the original into the media bucket, and inserts the record.
///
/// Transform failures degrade to "no variant" rather than aborting the
/// upload; rendering then falls back to the stored original.
pub async fn store_photo(
    pool: &PgPool,
    media: &MediaStore,
    file: UploadFile,
) -> Result<Photo, PhotosError> {
    if file.bytes.is_empty() {
        return Err(PhotosError::InvalidUpload("empty file".into()));
    }

    let source = file.bytes.clone();
    let filename = file.filename.clone();
    let (thumbnail, carousel) = task::spawn_blocking(move || {
        let thumbnail = image_transforms::create_thumbnail(&source)
            .map_err(|e| warn!(%filename, "thumbnail generation failed: {e}"))
            .ok();
        let carousel = image_transforms::create_carousel_variant(&source)
            .map_err(|e| warn!(%filename, "carousel variant generation failed: {e}"))
            .ok();
        (thumbnail, carousel)
    })
    .await?;

    let object_path = format!(
        "admin-uploads/{}.{}",
        Uuid::new_v4(),
        file_extension(&file.filename)
    );
    media.put(&object_path, &file.bytes).await?;

    let mime_type = file.mime_type.clone().or_else(|| {
        mime_guess::from_path(&file.filename)
            .first()
            .map(|m| m.to_string())
    });

    let created = PhotoStore::create(
        pool,
        &CreatePhoto {
            filename: file.filename,
            storage_path: Some(object_path),
            original_data: None,
            thumbnail_data: thumbnail.as_deref().map(encode_base64),
            carousel_data: carousel.as_deref().map(encode_base64),
            mime_type,
            file_size_bytes: Some(file.bytes.len() as i64),
            is_visible: true,
        },
    )
    .await?;

    Ok(created)
}

pub async fn set_photo_visibility(
    pool: &PgPool,
    id: Uuid,
    visible: bool,
) -> Result<(), PhotosError> {
    if PhotoStore::set_visibility(pool, id, visible).await? {
        Ok(())
    } else {
        Err(PhotosError::PhotoNotFound(id))
    }
}

/// Deletes a photo row and releases its storage object.
///
/// The row goes first; once it is gone the object is unreachable from any
/// listing, so an object-removal I/O failure is logged rather than undoing
/// the delete.
pub async fn delete_photo(pool: &PgPool, media: &MediaStore, id: Uuid) -> Result<(), PhotosError> {
    let photo = PhotoStore::delete(pool, id)
        .await?
        .ok_or(PhotosError::PhotoNotFound(id))?;

    if let Some(path) = &photo.storage_path
        && let Err(e) = media.delete(path).await
    {
        warn!(%id, path, "failed to remove storage object: {e}");
    }
    Ok(())
}

fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| "jpg".to_string(), str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_falls_back_to_jpg() {
        assert_eq!(file_extension("foto (1).JPEG"), "jpeg");
        assert_eq!(file_extension("noext"), "jpg");
        assert_eq!(file_extension("weird.PNG"), "png");
    }
}
