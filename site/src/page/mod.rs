//! Page module
//!
//! Server-side HTML rendering of the portfolio page.

pub mod renderer;

pub use renderer::render_page;
