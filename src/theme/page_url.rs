//! Previous/next links for paths of the form `/base` or `/base/page/{n}`

use url::form_urlencoded;

const PAGE_PART: &str = "page";

/// Query parameter carrying the selected group
pub const GROUP_PARAM: &str = "group";

/// Split `path` into its base and page number when it ends in `/page/{n}`
fn split_page(path: &str) -> (&str, Option<usize>) {
    let trimmed = path.trim_end_matches('/');
    let paged = trimmed.rsplit_once('/').and_then(|(rest, number)| {
        let base = rest.strip_suffix(PAGE_PART)?.strip_suffix('/')?;
        let number = number.parse::<usize>().ok()?;
        Some((base, number))
    });
    match paged {
        Some((base, number)) => (base, Some(number)),
        None => (trimmed, None),
    }
}

fn with_page(base: &str, page: usize) -> String {
    format!("{}/{}/{}", base, PAGE_PART, page)
}

fn root_if_empty(base: &str) -> String {
    if base.is_empty() {
        "/".to_string()
    } else {
        base.to_string()
    }
}

/// Link to the following page, or `path` itself on the last page
pub fn next_page_url(path: &str, total_pages: usize) -> String {
    let (base, page) = split_page(path);
    let current = page.unwrap_or(1).max(1);
    if current >= total_pages {
        return path.to_string();
    }
    with_page(base, current + 1)
}

/// Link to the preceding page; page 1 is the bare base path
pub fn prev_page_url(path: &str) -> String {
    match split_page(path) {
        (base, Some(page)) if page > 2 => with_page(base, page - 1),
        (base, Some(_)) => root_if_empty(base),
        (_, None) => path.to_string(),
    }
}

/// Append `?group=...` when a group is selected
pub fn append_group_param(url: &str, group: Option<&str>) -> String {
    match group {
        Some(group) if !group.is_empty() => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(GROUP_PARAM, group)
                .finish();
            format!("{}?{}", url, query)
        }
        _ => url.to_string(),
    }
}
