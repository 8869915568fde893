use utoipa::OpenApi;
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
    ),
    components(
        schemas(
            crate::modules::genre::dto::GenreInput,
            crate::modules::genre::dto::GenreResponse,
        )
    ),
    tags(
        (name = "Genres", description = "Genre catalogue")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

pub struct SecurityAddon;

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
