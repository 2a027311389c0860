use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::auth::handlers::register_handler,
        crate::routes::auth::handlers::login_handler,
        crate::routes::auth::handlers::refresh_handler,
        crate::routes::photos::handlers::list_photos_handler,
        crate::routes::photos::handlers::admin_list_photos_handler,
        crate::routes::photos::handlers::upload_photos_handler,
        crate::routes::photos::handlers::set_photo_visibility_handler,
        crate::routes::photos::handlers::delete_photo_handler,
        crate::routes::carousel::handlers::frame_handler,
        crate::routes::guestbook::handlers::current_card_handler,
        crate::routes::guestbook::handlers::submit_message_handler,
        crate::routes::guestbook::handlers::admin_list_messages_handler,
        crate::routes::poetry::handlers::list_poems_handler,
        crate::routes::poetry::handlers::add_poem_handler,
        crate::routes::settings::handlers::get_settings_handler,
        crate::routes::settings::handlers::update_settings_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Sign-up, sign-in and session management"),
        (name = "Photos", description = "Public photo listing"),
        (name = "Carousel", description = "Rotating photo display"),
        (name = "Guestbook", description = "Rotating guestbook messages"),
        (name = "Poetry", description = "Poetry display"),
        (name = "Admin", description = "Content moderation (admin flag required)"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
