use packageurl::PackageUrl;
use std::str::FromStr;

/// PurlUrlPolicy derives an informational homepage URL from a package URL
///
/// Well-known package types map onto their public registry page. For any other
/// type the `vcs_url` or `download_url` qualifier is used when present.
/// Unparseable purls yield an empty string; the URL is informational only and
/// never blocks attribution output.
pub struct PurlUrlPolicy;

impl PurlUrlPolicy {
    /// Derives the URL for a purl string, or an empty string when none is known
    pub fn derive(purl: &str) -> String {
        if purl.is_empty() {
            return String::new();
        }

        match PackageUrl::from_str(purl) {
            Ok(parsed) => Self::registry_url(&parsed)
                .or_else(|| Self::qualifier_url(&parsed))
                .unwrap_or_default(),
            Err(_) => String::new(),
        }
    }

    fn registry_url(purl: &PackageUrl) -> Option<String> {
        let name = purl.name();
        let version = purl.version();
        let qualified_name = match purl.namespace() {
            Some(namespace) => format!("{}/{}", namespace, name),
            None => name.to_string(),
        };

        let url = match purl.ty() {
            "cargo" => match version {
                Some(v) => format!("https://crates.io/crates/{}/{}", name, v),
                None => format!("https://crates.io/crates/{}", name),
            },
            "npm" => match version {
                Some(v) => format!("https://www.npmjs.com/package/{}/v/{}", qualified_name, v),
                None => format!("https://www.npmjs.com/package/{}", qualified_name),
            },
            "pypi" => {
                let normalized = name.to_lowercase().replace('_', "-");
                match version {
                    Some(v) => format!("https://pypi.org/project/{}/{}/", normalized, v),
                    None => format!("https://pypi.org/project/{}/", normalized),
                }
            }
            "golang" => match version {
                Some(v) => format!("https://pkg.go.dev/{}@{}", qualified_name, v),
                None => format!("https://pkg.go.dev/{}", qualified_name),
            },
            "maven" => {
                let group = purl.namespace()?;
                match version {
                    Some(v) => format!(
                        "https://central.sonatype.com/artifact/{}/{}/{}",
                        group, name, v
                    ),
                    None => format!("https://central.sonatype.com/artifact/{}/{}", group, name),
                }
            }
            "github" => format!("https://github.com/{}", qualified_name),
            "gem" => match version {
                Some(v) => format!("https://rubygems.org/gems/{}/versions/{}", name, v),
                None => format!("https://rubygems.org/gems/{}", name),
            },
            "nuget" => match version {
                Some(v) => format!("https://www.nuget.org/packages/{}/{}", name, v),
                None => format!("https://www.nuget.org/packages/{}", name),
            },
            _ => return None,
        };

        Some(url)
    }

    fn qualifier_url(purl: &PackageUrl) -> Option<String> {
        let qualifiers = purl.qualifiers();
        ["vcs_url", "download_url"]
            .iter()
            .find_map(|key| qualifiers.get(*key))
            .and_then(|value| {
                let value: &str = value;
                let value = value.strip_prefix("git+").unwrap_or(value);
                Self::is_web_url(value).then(|| value.to_string())
            })
    }

    /// True for `http://` and `https://` links, the only ones rendered as `href`s.
    pub fn is_web_url(value: &str) -> bool {
        let lower = value.to_ascii_lowercase();
        lower.starts_with("https://") || lower.starts_with("http://")
    }
}
