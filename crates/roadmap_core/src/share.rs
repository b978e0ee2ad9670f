//! Shareable links: `<app>?course=<course url>` opens the roadmap for a course.
use url::Url;

/// Query parameter carrying the shared course URL.
pub const COURSE_PARAM: &str = "course";

/// Returns the course URL carried by the application `location`, if any.
pub fn shared_course_url(location: &str) -> Option<String> {
    let url = Url::parse(location).ok()?;
    url.query_pairs()
        .find(|(name, _)| name == COURSE_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Removes the course parameter from `location`, keeping the path and any
/// other parameters. Unparsable input is returned unchanged.
pub fn strip_course_param(location: &str) -> String {
    let Ok(mut url) = Url::parse(location) else {
        return location.to_string();
    };
    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != COURSE_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    if remaining.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(remaining);
    }
    url.into()
}

/// Builds a link to `app_base` that opens `course_url` when visited.
pub fn share_link(app_base: &str, course_url: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(app_base)?;
    url.query_pairs_mut().append_pair(COURSE_PARAM, course_url);
    Ok(url.into())
}
