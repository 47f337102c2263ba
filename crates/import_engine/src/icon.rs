use import_core::IconResolver;
use url::Url;

pub const DEFAULT_ICON: &str = "file/fill/file";

const ICONS: &[(&[&str], &str)] = &[
    (&["pdf"], "file/fill/pdf"),
    (&["ppt", "pptx"], "file/fill/ppt"),
    (&["xls", "xlsx"], "file/fill/xlsx"),
    (&["csv"], "file/fill/csv"),
    (&["doc", "docx"], "file/fill/doc"),
    (&["txt"], "file/fill/txt"),
    (&["md"], "file/fill/markdown"),
    (&["html", "htm"], "file/fill/html"),
    (
        &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif"],
        "image",
    ),
];

/// Picks an icon from the extension of the URL's last path segment.
#[derive(Debug, Clone)]
pub struct ExtensionIconResolver {
    fallback: String,
}

impl Default for ExtensionIconResolver {
    fn default() -> Self {
        Self::with_fallback(DEFAULT_ICON)
    }
}

impl ExtensionIconResolver {
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }
}

impl IconResolver for ExtensionIconResolver {
    fn resolve(&self, source_url: &str) -> String {
        extension(source_url)
            .and_then(|ext| {
                ICONS
                    .iter()
                    .find(|(suffixes, _)| suffixes.contains(&ext.as_str()))
                    .map(|(_, icon)| (*icon).to_string())
            })
            .unwrap_or_else(|| self.fallback.clone())
    }
}

fn extension(source_url: &str) -> Option<String> {
    let segment = match Url::parse(source_url.trim()) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(ToOwned::to_owned)?,
        // Not an absolute URL; strip query and fragment by hand.
        Err(_) => {
            let path = source_url.split(['?', '#']).next().unwrap_or_default();
            path.rsplit('/').next().unwrap_or_default().to_owned()
        }
    };
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
