use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::SiteLayout;
use crate::error::{PostError, Result};
use crate::front_matter::render_front_matter;
use crate::request::PostRequest;
use crate::slug::post_filename;

/// What happened when we tried to create the post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { filename: String, path: PathBuf },
    AlreadyExists { path: PathBuf },
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path, .. } | Self::AlreadyExists { path } => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// `root/_posts` when it exists (as anything), otherwise `root`.
pub fn posts_dir(root: &Path, layout: &SiteLayout) -> PathBuf {
    let candidate = root.join(&layout.posts_dir);
    if candidate.exists() {
        candidate
    } else {
        root.to_path_buf()
    }
}

/// Write a new post under `root` unless one with the same filename exists.
///
/// The file is opened with `create_new`, so a file that shows up after the
/// existence check is still never overwritten.
pub fn create_post(request: &PostRequest, root: &Path, layout: &SiteLayout) -> Result<Outcome> {
    let filename = post_filename(request, layout);
    let dir = posts_dir(root, layout);
    let path = dir.join(&filename);
    debug!(dir = %dir.display(), %filename, "resolved post destination");

    if path.exists() {
        info!(path = %path.display(), "post already exists, leaving it untouched");
        return Ok(Outcome::AlreadyExists { path });
    }

    let body = render_front_matter(request, layout);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            warn!(path = %path.display(), "post appeared before it could be written");
            return Ok(Outcome::AlreadyExists { path });
        }
        Err(err) => return Err(PostError::write(&path, err)),
    };
    file.write_all(body.as_bytes())
        .map_err(|err| PostError::write(&path, err))?;

    info!(path = %path.display(), bytes = body.len(), "post written");
    Ok(Outcome::Created { filename, path })
}
