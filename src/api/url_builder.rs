//! URL construction for API requests.
//!
//! Pure string building with no network access. Query types resolve to paths
//! through [`Route`]; parameters are percent-encoded and emitted in the order
//! given.

use super::routes::Route;

/// Scheme used for all API requests.
pub const API_SCHEME: &str = "https";

/// Host serving the search API.
pub const API_HOST: &str = "api.twitch.tv";

/// Builder used for constructing request URLs.
///
/// # Example
///
/// ```rust
/// use jitters::api::UrlBuilder;
///
/// let url = UrlBuilder::new("search").param("q", "starcraft").build();
/// assert_eq!(url, "https://api.twitch.tv/kraken/search/streams?q=starcraft");
/// ```
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    path: Option<&'static str>,
    params: Vec<(String, String)>,
}

impl UrlBuilder {
    /// Starts a URL for the given query type.
    ///
    /// Unknown query types leave the path empty, giving `https://api.twitch.tv/?...`.
    #[must_use]
    pub fn new(query_type: &str) -> Self {
        let path = Route::from_key(query_type).map(Route::path);
        if path.is_none() {
            tracing::debug!(query_type = %query_type, "unknown query type, omitting path");
        }
        Self { path, params: Vec::new() }
    }

    /// Appends a query parameter. Order is preserved.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Renders the final URL.
    #[must_use]
    pub fn build(&self) -> String {
        let mut url = format!("{API_SCHEME}://{API_HOST}/{}", self.path.unwrap_or_default());
        if !self.params.is_empty() {
            url.push('?');
            url.push_str(&params_to_string(&self.params));
        }
        url
    }
}

/// Returns a URL for a query type and an ordered parameter list.
///
/// # Example
///
/// ```rust
/// use jitters::api::url_for;
///
/// assert_eq!(
///     url_for("search", &[("q", "rocket league")]),
///     "https://api.twitch.tv/kraken/search/streams?q=rocket%20league",
/// );
/// ```
#[must_use]
pub fn url_for<K, V>(query_type: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .fold(UrlBuilder::new(query_type), |builder, (k, v)| {
            builder.param(k.as_ref(), v.as_ref())
        })
        .build()
}

/// Joins parameters as `name=value` pairs with `&`, percent-encoding both sides.
#[must_use]
pub fn params_to_string<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k.as_ref()), urlencoding::encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends `name=value` to a ready-made URL unless it already carries `name`.
///
/// Used for paging links returned by the API, which omit the credential and
/// callback parameters.
///
/// # Example
///
/// ```rust
/// use jitters::api::ensure_param;
///
/// let url = ensure_param("https://api.twitch.tv/kraken/search/streams?offset=10", "callback", "cb");
/// assert_eq!(url, "https://api.twitch.tv/kraken/search/streams?offset=10&callback=cb");
/// ```
#[must_use]
pub fn ensure_param(url: &str, name: &str, value: &str) -> String {
    if has_param(url, name) {
        return url.to_string();
    }
    let separator = match url.find('?') {
        None => "?",
        Some(idx) if idx + 1 == url.len() || url.ends_with('&') => "",
        Some(_) => "&",
    };
    format!(
        "{url}{separator}{}={}",
        urlencoding::encode(name),
        urlencoding::encode(value)
    )
}

/// Returns `true` if the URL's query string contains a parameter called `name`.
#[must_use]
pub fn has_param(url: &str, name: &str) -> bool {
    let Some((_, query)) = url.split_once('?') else {
        return false;
    };
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split('=').next())
        .any(|key| urlencoding::decode(key).is_ok_and(|k| k == name))
}
