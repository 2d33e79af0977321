use std::fmt::Display;

/// Joins a base URL and an endpoint path, tolerating a trailing slash on the base.
pub fn create_model_url(base_url: impl Display, api_url: impl Display) -> String {
    let base = base_url.to_string();
    format!("{}/{}", base.trim_end_matches('/'), api_url)
}

#[test]
fn test_create_model_url() {
    assert_eq!(
        "test_base/api_base",
        create_model_url("test_base", "api_base")
    );
    assert_eq!(
        "https://google.serper.dev/search",
        create_model_url("https://google.serper.dev/", "search")
    );
}
