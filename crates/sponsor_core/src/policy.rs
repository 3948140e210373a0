use url::Url;

/// Decides whether a URL may be shown inside the embedded content view.
pub trait EmbedPolicy: Send + Sync {
    fn is_eligible_for_embedded_view(&self, url: &str) -> bool;
}

impl<F> EmbedPolicy for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_eligible_for_embedded_view(&self, url: &str) -> bool {
        self(url)
    }
}

/// Accepts http(s) URLs that contain none of the configured exclusion markers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExclusionPolicy {
    exclusions: Vec<String>,
}

impl ExclusionPolicy {
    pub fn new<I, S>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclusions: exclusions
                .into_iter()
                .map(Into::<String>::into)
                .filter(|marker| !marker.is_empty())
                .collect(),
        }
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }
}

impl EmbedPolicy for ExclusionPolicy {
    fn is_eligible_for_embedded_view(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }
        !self
            .exclusions
            .iter()
            .any(|marker| url.contains(marker.as_str()))
    }
}
