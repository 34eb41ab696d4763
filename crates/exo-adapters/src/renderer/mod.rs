//! Template renderer adapters.

mod filters;
mod tera_renderer;

pub use tera_renderer::TeraRenderer;
