pub mod config;
pub mod error;
pub mod front_matter;
pub mod post;
pub mod request;
pub mod slug;

pub use config::SiteLayout;
pub use error::{PostError, Result};
pub use front_matter::render_front_matter;
pub use post::{create_post, posts_dir, Outcome};
pub use request::PostRequest;
pub use slug::{post_filename, title_slug};
