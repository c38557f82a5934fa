/// Site conventions that shape a new post.
///
/// There is no config file: the defaults are the Jekyll layout and the binary
/// always uses them. Library callers and tests may override individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Subdirectory preferred as destination when it exists.
    pub posts_dir: String,
    /// Extension appended to the filename, without the dot.
    pub extension: String,
    /// Value of the `layout:` key in front matter.
    pub layout: String,
    /// Title used when none is given on the command line.
    pub default_title: String,
}

pub const DEFAULT_POSTS_DIR: &str = "_posts";
pub const DEFAULT_EXTENSION: &str = "md";
pub const DEFAULT_LAYOUT: &str = "post";
pub const DEFAULT_TITLE: &str = "New Post";

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            posts_dir: DEFAULT_POSTS_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}
