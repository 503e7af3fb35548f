//! Login redirect helpers. The guard sends unauthenticated visitors to
//! `/login?next=<location>`; after login the `next` value is honoured only when
//! it is a same-origin path, so the parameter cannot be used as an open redirect.

use url::form_urlencoded;

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_RETURN_PATH: &str = "/dashboard";

/// Rebuilds the location the visitor asked for from router parts.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let search = search.trim().trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Login page URL that returns the visitor to `requested` afterwards.
pub fn login_path(requested: &str) -> String {
    let requested = requested.trim();
    if requested.is_empty() || requested == "/" || is_login(requested) {
        return LOGIN_PATH.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("next", requested)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}

/// Where to go after a successful login, given the decoded `next` parameter.
pub fn return_target(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if is_local_path(path) && !is_login(path) => path.to_string(),
        _ => DEFAULT_RETURN_PATH.to_string(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

fn is_login(path: &str) -> bool {
    let route = path.split(['?', '#']).next().unwrap_or_default();
    route.trim_end_matches('/') == LOGIN_PATH
}

#[cfg(test)]
mod tests {
    use super::{login_path, requested_location, return_target};

    #[test]
    fn requested_location_keeps_query() {
        assert_eq!(requested_location("/analytics", ""), "/analytics");
        assert_eq!(
            requested_location("/analytics", "?period=week"),
            "/analytics?period=week"
        );
        assert_eq!(
            requested_location("/analytics", "period=week"),
            "/analytics?period=week"
        );
    }

    #[test]
    fn login_path_encodes_the_requested_location() {
        assert_eq!(login_path("/payments"), "/login?next=%2Fpayments");
        assert_eq!(
            login_path("/ranking?period=month"),
            "/login?next=%2Franking%3Fperiod%3Dmonth"
        );
    }

    #[test]
    fn login_path_skips_trivial_locations() {
        assert_eq!(login_path(""), "/login");
        assert_eq!(login_path("/"), "/login");
        assert_eq!(login_path("/login"), "/login");
        assert_eq!(login_path("/login/?next=%2Fx"), "/login");
    }

    #[test]
    fn return_target_accepts_local_paths() {
        assert_eq!(return_target(Some("/payments")), "/payments");
        assert_eq!(
            return_target(Some(" /ranking?period=week ")),
            "/ranking?period=week"
        );
    }

    #[test]
    fn return_target_rejects_foreign_or_missing_targets() {
        assert_eq!(return_target(None), "/dashboard");
        assert_eq!(return_target(Some("")), "/dashboard");
        assert_eq!(return_target(Some("https://evil.test")), "/dashboard");
        assert_eq!(return_target(Some("//evil.test/x")), "/dashboard");
        assert_eq!(return_target(Some("/\\evil.test")), "/dashboard");
        assert_eq!(return_target(Some("/login")), "/dashboard");
    }
}
