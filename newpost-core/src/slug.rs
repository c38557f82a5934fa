use crate::config::SiteLayout;
use crate::request::PostRequest;

const DATE_PREFIX_FORMAT: &str = "%Y-%m-%d";

/// Lowercase the title and turn each space into a hyphen.
///
/// Nothing else is touched: punctuation and non-ASCII characters survive, and
/// runs of spaces become runs of hyphens.
pub fn title_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// `<YYYY-MM-DD>-<slug>.<ext>` using the request's creation date.
pub fn post_filename(request: &PostRequest, layout: &SiteLayout) -> String {
    format!(
        "{}-{}.{}",
        request.created.format(DATE_PREFIX_FORMAT),
        title_slug(&request.title),
        layout.extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn title_slug_basic_cases() {
        assert_eq!(title_slug("Chunky Bacon"), "chunky-bacon");
        assert_eq!(title_slug("New Post"), "new-post");
        assert_eq!(title_slug("already-slugged"), "already-slugged");
    }

    #[test]
    fn title_slug_keeps_everything_but_spaces() {
        assert_eq!(title_slug("What's Up?"), "what's-up?");
        assert_eq!(title_slug("two  spaces"), "two--spaces");
        assert_eq!(title_slug("Ünïcode Title"), "ünïcode-title");
    }

    #[test]
    fn filename_has_date_prefix_and_extension() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .unwrap();
        let req = PostRequest::new("Chunky Bacon", vec![], created);
        assert_eq!(
            post_filename(&req, &SiteLayout::default()),
            "2024-01-02-chunky-bacon.md"
        );
    }

    #[test]
    fn filename_respects_layout_extension() {
        let created = NaiveDate::from_ymd_opt(2023, 12, 5)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let req = PostRequest::new("Notes", vec![], created);
        let layout = SiteLayout {
            extension: "markdown".to_string(),
            ..SiteLayout::default()
        };
        assert_eq!(post_filename(&req, &layout), "2023-12-05-notes.markdown");
    }
}
