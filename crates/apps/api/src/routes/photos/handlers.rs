use crate::api_state::ApiContext;
use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use common_services::api::photos::error::PhotosError;
use common_services::api::photos::interfaces::{
    PhotoListResponse, PhotoQuery, PhotoView, UploadSummary, VisibilityPayload,
};
use common_services::api::photos::pipeline::resolve_display_source;
use common_services::api::photos::service::{
    UploadFile, delete_photo, set_photo_visibility, upload_photos,
};
use common_services::database::PhotoStore;
use common_types::SizeClass;
use http::StatusCode;
use tracing::{instrument, warn};
use uuid::Uuid;

/// Public photo listing: visible photos in display order, each with a
/// resolved display URL for the requested size class.
#[utoipa::path(
    get,
    path = "/photos",
    tag = "Photos",
    params(PhotoQuery),
    responses(
        (status = 200, description = "Visible photos in display order.", body = PhotoListResponse),
    )
)]
pub async fn list_photos_handler(
    State(context): State<ApiContext>,
    Query(query): Query<PhotoQuery>,
) -> Json<PhotoListResponse> {
    let size = query.size.unwrap_or(SizeClass::Carousel);
    let photos = context.pipeline.photos().await;

    let mut views = Vec::with_capacity(photos.len());
    for photo in photos.iter() {
        let handle = context.pipeline.resolve(photo, size).await;
        views.push(PhotoView::from_photo(photo, &handle));
    }

    Json(PhotoListResponse {
        phase: context.pipeline.phase().await,
        photos: views,
    })
}

/// Admin listing: every photo regardless of visibility, newest first.
#[utoipa::path(
    get,
    path = "/admin/photos",
    tag = "Admin",
    responses(
        (status = 200, description = "All photos, newest first.", body = [PhotoView]),
        (status = 403, description = "Admin privileges required."),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context), err(Debug))]
pub async fn admin_list_photos_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<PhotoView>>, PhotosError> {
    let photos = PhotoStore::list_all(&context.pool).await?;
    let views = photos
        .iter()
        .map(|photo| {
            let handle = resolve_display_source(photo, SizeClass::Thumbnail);
            PhotoView::from_photo(photo, &handle)
        })
        .collect();
    Ok(Json(views))
}

/// Bulk photo upload. Accepts any number of multipart file fields and
/// reports a per-file outcome; one bad file never fails the batch.
#[utoipa::path(
    post,
    path = "/admin/photos",
    tag = "Admin",
    responses(
        (status = 200, description = "Per-file upload outcomes.", body = UploadSummary),
        (status = 403, description = "Admin privileges required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_photos_handler(
    State(context): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<UploadSummary>, PhotosError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PhotosError::InvalidUpload(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        let mime_type = field.content_type().map(ToString::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| PhotosError::InvalidUpload(e.to_string()))?;
        files.push(UploadFile {
            filename,
            mime_type,
            bytes: bytes.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(PhotosError::InvalidUpload("no files in request".into()));
    }

    let summary = upload_photos(&context.pool, &context.media, files).await;
    refresh_after_mutation(&context).await;
    Ok(Json(summary))
}

/// Toggle a photo's public visibility.
#[utoipa::path(
    patch,
    path = "/admin/photos/{id}/visibility",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "Photo id")),
    request_body = VisibilityPayload,
    responses(
        (status = 204, description = "Visibility updated."),
        (status = 404, description = "No photo with this id."),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context), err(Debug))]
pub async fn set_photo_visibility_handler(
    State(context): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityPayload>,
) -> Result<StatusCode, PhotosError> {
    set_photo_visibility(&context.pool, id, payload.visible).await?;
    refresh_after_mutation(&context).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a photo: removes the database row and releases the stored object.
#[utoipa::path(
    delete,
    path = "/admin/photos/{id}",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "Photo id")),
    responses(
        (status = 204, description = "Photo deleted."),
        (status = 404, description = "No photo with this id."),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context), err(Debug))]
pub async fn delete_photo_handler(
    State(context): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PhotosError> {
    delete_photo(&context.pool, &context.media, id).await?;
    refresh_after_mutation(&context).await;
    Ok(StatusCode::NO_CONTENT)
}

/// The mutation already succeeded; a reload failure only means the public
/// list settles empty and the phase endpoint reports it.
async fn refresh_after_mutation(context: &ApiContext) {
    if let Err(e) = context.refresh_photos().await {
        warn!("photo reload after admin mutation failed: {e:?}");
    }
}
