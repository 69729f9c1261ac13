//! Template payloads for the Docker scaffold

/// Trait for template lookup - allows tests to substitute payloads
pub trait TemplateSource {
    /// Load a template's full content by its fixed relative name
    fn load(&self, name: &str) -> Option<&str>;
}

/// Fixed relative names of the Docker templates
pub const DOCKERFILE: &str = "Dockerfile";
pub const COMPOSE_DEV: &str = "docker-compose.dev.yml";
pub const COMPOSE_PROD: &str = "docker-compose.prod.yml";

/// Templates compiled into the binary
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, name: &str) -> Option<&str> {
        match name {
            DOCKERFILE => Some(include_str!("templates/Dockerfile")),
            COMPOSE_DEV => Some(include_str!("templates/docker-compose.dev.yml")),
            COMPOSE_PROD => Some(include_str!("templates/docker-compose.prod.yml")),
            _ => None,
        }
    }
}
