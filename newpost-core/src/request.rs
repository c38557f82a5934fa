use chrono::NaiveDateTime;

use crate::config::SiteLayout;

/// Everything needed to stamp out one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub title: String,
    /// Kept in argument order.
    pub categories: Vec<String>,
    /// Local wall-clock time captured once at invocation.
    pub created: NaiveDateTime,
}

impl PostRequest {
    pub fn new(
        title: impl Into<String>,
        categories: Vec<String>,
        created: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            categories,
            created,
        }
    }

    /// Build from the arguments that follow the program name.
    ///
    /// The first argument is the title; the rest are categories. With no
    /// arguments the layout's default title is used.
    pub fn from_args<I, S>(args: I, created: NaiveDateTime, layout: &SiteLayout) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let title = args
            .next()
            .unwrap_or_else(|| layout.default_title.clone());
        let categories = args.collect();
        Self::new(title, categories, created)
    }

    /// Categories joined by single spaces; empty when there are none.
    pub fn categories_line(&self) -> String {
        self.categories.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    #[test]
    fn no_args_uses_default_title() {
        let req = PostRequest::from_args(Vec::<String>::new(), at(), &SiteLayout::default());
        assert_eq!(req.title, "New Post");
        assert!(req.categories.is_empty());
        assert_eq!(req.categories_line(), "");
    }

    #[test]
    fn first_arg_is_title_rest_are_categories() {
        let req = PostRequest::from_args(
            ["Chunky Bacon", "bacon", "food"],
            at(),
            &SiteLayout::default(),
        );
        assert_eq!(req.title, "Chunky Bacon");
        assert_eq!(req.categories, vec!["bacon", "food"]);
        assert_eq!(req.categories_line(), "bacon food");
    }

    #[test]
    fn empty_title_argument_is_kept() {
        let req = PostRequest::from_args([""], at(), &SiteLayout::default());
        assert_eq!(req.title, "");
    }
}
