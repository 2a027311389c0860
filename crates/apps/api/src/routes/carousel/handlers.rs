use crate::api_state::ApiContext;
use crate::carousel::interfaces::{CarouselFrame, CarouselSlot};
use axum::Json;
use axum::extract::{Path, State};
use common_services::api::photos::interfaces::PhotoView;
use common_types::SizeClass;

/// The current carousel frame: up to `window_size` stacked slots around the
/// rotation position, each with its visual transform and resolved photo.
#[utoipa::path(
    get,
    path = "/carousel/frame",
    tag = "Carousel",
    responses(
        (status = 200, description = "Current rotation frame.", body = CarouselFrame),
    )
)]
pub async fn frame_handler(State(context): State<ApiContext>) -> Json<CarouselFrame> {
    Json(build_frame(&context).await)
}

/// Manual forward navigation. Does not reset the auto-advance timer.
pub async fn next_handler(State(context): State<ApiContext>) -> Json<CarouselFrame> {
    context.carousel.next();
    Json(build_frame(&context).await)
}

/// Manual backward navigation. Does not reset the auto-advance timer.
pub async fn previous_handler(State(context): State<ApiContext>) -> Json<CarouselFrame> {
    context.carousel.previous();
    Json(build_frame(&context).await)
}

/// Re-centers the window on the photo shown at `slot`.
pub async fn focus_handler(
    State(context): State<ApiContext>,
    Path(slot): Path<usize>,
) -> Json<CarouselFrame> {
    context.carousel.focus_slot(slot);
    Json(build_frame(&context).await)
}

async fn build_frame(context: &ApiContext) -> CarouselFrame {
    let window_size = context
        .system_settings
        .load()
        .await
        .carousel_photos_count;
    let photos = context.pipeline.photos().await;
    let state = context.carousel.current();

    let mut slots = Vec::new();
    for frame_slot in rotation::compute_frame(&state, window_size) {
        // The rotator is realigned on every reload; the guard only covers
        // the instant between list swap and set_len.
        let Some(photo) = photos.get(frame_slot.absolute_index) else {
            continue;
        };
        let handle = context.pipeline.resolve(photo, SizeClass::Carousel).await;
        slots.push(CarouselSlot {
            slot: frame_slot.slot,
            absolute_index: frame_slot.absolute_index,
            transform: frame_slot.transform,
            photo: PhotoView::from_photo(photo, &handle),
        });
    }

    CarouselFrame {
        phase: context.pipeline.phase().await,
        current_index: state.current_index(),
        total: photos.len(),
        window_size,
        slots,
    }
}
