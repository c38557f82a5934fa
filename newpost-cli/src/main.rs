//! newpost CLI - create a dated Jekyll post stub
//!
//! `newpost [title] [category ...]` writes `YYYY-MM-DD-<title>.md` with
//! front matter into `./_posts` when that exists, or into the current
//! directory otherwise. An existing post is never overwritten.

use std::ffi::OsString;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use newpost_core::{create_post, Outcome, PostError, PostRequest, SiteLayout};
use tracing::debug;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "newpost",
    author,
    version,
    about = "Create a new blog post stub with date-prefixed filename and front matter",
    long_about = "Create a new blog post stub for a Jekyll-style site. The file lands in \
                  ./_posts if that exists, otherwise in the current directory. Existing \
                  posts are left untouched."
)]
struct Cli {
    /// Post title (defaults to "New Post"), then categories for front matter.
    /// Every argument is taken literally, even when it starts with `-`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Arguments as text; bytes that are not UTF-8 become U+FFFD
    fn into_args(self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

fn main() -> Result<()> {
    tracing_setup::init_tracing().ok();
    let cli = Cli::parse();

    let layout = SiteLayout::default();
    let created = Local::now().naive_local();
    let request = PostRequest::from_args(cli.into_args(), created, &layout);
    debug!(?request, "parsed post request");

    let root = std::env::current_dir()
        .map_err(PostError::current_dir)
        .context("Failed to resolve site root")?;

    let outcome = create_post(&request, &root, &layout)
        .with_context(|| format!("Failed to create post \"{}\"", request.title))?;

    match outcome {
        Outcome::Created { filename, .. } => println!("Post created! {filename}"),
        Outcome::AlreadyExists { path } => {
            println!("Looks like this post already exists: {}", path.display())
        }
    }

    Ok(())
}
