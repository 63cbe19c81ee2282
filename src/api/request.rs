use super::routing::{Cluster, Region};
use url::form_urlencoded;

pub const API_DOMAIN: &str = "api.riotgames.com";
pub const DATA_DRAGON_URL: &str = "https://ddragon.leagueoflegends.com";

/// Where a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Platform(Region),
    Regional(Cluster),
    /// Static game data, no key and no rate limit.
    DataDragon,
}

impl Host {
    pub fn is_rate_limited(&self) -> bool {
        !matches!(self, Host::DataDragon)
    }
}

/// A path template plus the raw values for its `{placeholders}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub host: Host,
    pub template: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    pub fn new(host: Host, template: &'static str) -> Self {
        RequestDescriptor {
            host,
            template,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }
}

/// Percent-encode one attribute so it can sit in a path segment or query
/// value. Spaces become `%20`, never `+`. Only `*-._` and alphanumerics pass
/// through, so `~` is sent as `%7E`; the API decodes both forms the same.
pub fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// `https://{host}.api.riotgames.com{path}?api_key={key}`, placeholders
/// left in place.
pub fn build_base(host: &str, path_template: &str, api_key: &str) -> String {
    format!(
        "https://{}.{}{}?api_key={}",
        host,
        API_DOMAIN,
        path_template,
        encode(api_key)
    )
}

/// Replace `{name}` with the encoded value.
pub fn substitute(url: &str, name: &str, raw_value: &str) -> String {
    url.replace(&format!("{{{}}}", name), &encode(raw_value))
}

/// Turns descriptors into final URLs for one key and locale.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    api_key: String,
    locale: String,
}

impl UrlBuilder {
    pub fn new(api_key: impl Into<String>, locale: impl Into<String>) -> Self {
        UrlBuilder {
            api_key: api_key.into(),
            locale: locale.into(),
        }
    }

    pub fn build(&self, request: &RequestDescriptor) -> String {
        let mut url = match request.host {
            Host::Platform(region) => build_base(region.as_str(), request.template, &self.api_key),
            Host::Regional(cluster) => {
                build_base(cluster.as_str(), request.template, &self.api_key)
            }
            Host::DataDragon => {
                let url = format!("{}{}", DATA_DRAGON_URL, request.template);
                substitute(&url, "locale", &self.locale)
            }
        };
        for (name, value) in &request.params {
            url = substitute(&url, name, value);
        }
        url
    }
}
