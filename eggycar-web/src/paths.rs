//! URL helpers that respect the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (for example `/play` when the site is
//! served from a subdirectory). Without it every path is root-anchored.

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL of a static asset such as a cover image.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(public_url(), relative)
}

/// Href for a full page load of a site route.
#[must_use]
pub fn site_href(route_path: &str) -> String {
    join_base(public_url(), route_path)
}

/// Router basename, `None` when the site is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    base_segment(public_url())
}

/// Router-relative path for a document pathname, with the base removed.
#[must_use]
pub fn route_path(pathname: &str) -> String {
    strip_base(public_url(), pathname)
}

fn strip_base(base: &str, pathname: &str) -> String {
    let rest = base_segment(base)
        .and_then(|base| {
            pathname
                .strip_prefix(base.as_str())
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
                .map(str::to_string)
        })
        .unwrap_or_else(|| pathname.to_string());
    let trimmed = rest.trim_end_matches('/');
    if trimmed.is_empty() {
        String::from("/")
    } else {
        trimmed.to_string()
    }
}

fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = path.trim_start_matches('/');
    format!("{base}/{rel}")
}

fn base_segment(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_keep_paths_root_anchored() {
        assert_eq!(asset_path("images/games/slope.png"), "/images/games/slope.png");
        assert_eq!(site_href("/about"), "/about");
        assert_eq!(site_href("/"), "/");
        assert_eq!(router_base(), None);
        assert_eq!(route_path("/about"), "/about");
        assert_eq!(route_path("/"), "/");
    }

    #[test]
    fn subdirectory_deployments_prefix_the_base() {
        assert_eq!(join_base("/play/", "/game-details/slope"), "/play/game-details/slope");
        assert_eq!(join_base("/play", "images/a.png"), "/play/images/a.png");
        assert_eq!(base_segment(" /play/ "), Some(String::from("/play")));
        assert_eq!(base_segment("/"), None);
    }

    #[test]
    fn route_paths_drop_the_deployment_base() {
        assert_eq!(strip_base("/play", "/play/about"), "/about");
        assert_eq!(strip_base("/play/", "/play/"), "/");
        assert_eq!(strip_base("/play", "/play"), "/");
        assert_eq!(strip_base("/play", "/play/game-details/slope"), "/game-details/slope");
        assert_eq!(strip_base("/play", "/playground"), "/playground");
        assert_eq!(strip_base("", "/about/"), "/about");
        assert_eq!(strip_base("", ""), "/");
    }
}
