//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{ContactPageResponse, ContactResponse, EditContactForm, FavouriteForm};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::contact::get_contact,
        super::contact::update_favourite,
        super::contact::edit_contact,
        super::contact::destroy_contact,
    ),
    info(
        title = "Contacts API",
        version = "0.2.0",
        description = "Contact detail page: loader, favourite toggle, edit and destroy actions.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Contact", description = "Contact loading and mutations"),
    ),
    components(
        schemas(
            ContactResponse,
            ContactPageResponse,
            FavouriteForm,
            EditContactForm,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_contact_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/contacts/{contact_id}"));
        assert!(paths.iter().any(|p| *p == "/contacts/{contact_id}/edit"));
        assert!(paths.iter().any(|p| *p == "/contacts/{contact_id}/destroy"));
    }
}
