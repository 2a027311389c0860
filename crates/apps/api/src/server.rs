use crate::api_state::ApiContext;
use crate::create_router;
use app_state::{AppSettings, constants};
use axum::routing::get_service;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use common_services::api::guestbook::display::GuestbookDisplay;
use common_services::api::photos::pipeline::PhotoPipeline;
use common_services::api::settings::service::SettingsStore;
use common_services::storage::MediaStore;
use common_types::SizeClass;
use http::{HeaderValue, header};
use rotation::Rotator;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub async fn serve(pool: PgPool, settings: AppSettings) -> Result<()> {
    info!("🚀 Initializing server...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    let consts = constants();
    let api_state = ApiContext {
        pool: pool.clone(),
        media: MediaStore::new(settings.storage.media_root.clone()),
        pipeline: Arc::new(PhotoPipeline::new(pool.clone())),
        carousel: Arc::new(Rotator::new(
            0,
            Duration::from_millis(consts.carousel.advance_interval_ms),
        )),
        guestbook: Arc::new(GuestbookDisplay::new(
            pool,
            Duration::from_millis(consts.guestbook.display_interval_ms),
            Duration::from_millis(consts.guestbook.fade_ms),
        )),
        system_settings: SettingsStore::new(
            settings.storage.system_settings_file(),
            consts.carousel.min_photos_count,
            consts.carousel.max_photos_count,
            consts.carousel.default_photos_count,
        ),
        preload_count: consts.carousel.preload_count,
        settings: settings.clone(),
    };

    // Initial loads. A failure settles as an empty ready list and is
    // reported, never retried automatically.
    if let Err(e) = api_state.refresh_photos().await {
        warn!("initial photo load failed: {e:?}");
    }
    if let Err(e) = api_state.refresh_guestbook().await {
        warn!("initial guestbook load failed: {e:?}");
    }

    spawn_preload_follower(&api_state);

    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allowed_origins)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
        ]);

    // The media bucket is served statically; objects are immutable once
    // written.
    let serve_media = ServeDir::new(&settings.storage.media_root);
    let cache_layer = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=31536000, immutable"),
    );

    let app = create_router(api_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .nest_service("/media", get_service(serve_media).layer(cache_layer));

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;

    info!("🎂 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Follows rotation steps and pre-resolves handles for the upcoming photos,
/// so advancing never blocks on decode. Dies with the carousel's watch
/// channel on shutdown.
fn spawn_preload_follower(context: &ApiContext) {
    let pipeline = Arc::clone(&context.pipeline);
    let mut updates = context.carousel.subscribe();
    let preload_count = context.preload_count;
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = *updates.borrow_and_update();
            pipeline
                .preload_window(state.current_index(), preload_count, SizeClass::Carousel)
                .await;
        }
    });
}
