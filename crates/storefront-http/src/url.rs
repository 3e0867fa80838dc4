//! URL construction helpers for the items API and item images.
//!
//! Pure functions; nothing here performs I/O.

use storefront_core::ItemId;
use url::Url;

/// Default placeholder dimensions, in pixels.
const PLACEHOLDER_SIZE: u32 = 400;

/// Default placeholder caption.
const PLACEHOLDER_TEXT: &str = "No Image";

/// Append `segment` to the path of `base`, keeping any existing prefix.
fn with_path(base: &Url, segment: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{segment}"));
    url
}

/// `{base}/items/`
pub fn build_items_url(base: &Url) -> Url {
    with_path(base, "items/")
}

/// `{base}/items/{id}`
pub fn build_item_url(base: &Url, id: ItemId) -> Url {
    with_path(base, &format!("items/{id}"))
}

/// Full URL of an item image served by the backend.
///
/// `path` is the item's `img` value, with or without a leading slash.
pub fn image_url(static_files_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        static_files_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Like [`image_url`], but an empty path yields `fallback` or a placeholder.
pub fn image_url_with_fallback(static_files_url: &str, path: &str, fallback: Option<&str>) -> String {
    if path.is_empty() {
        fallback.map_or_else(
            || placeholder_image_url(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_TEXT),
            str::to_string,
        )
    } else {
        image_url(static_files_url, path)
    }
}

/// A generated placeholder image with `text` as its caption.
pub fn placeholder_image_url(width: u32, height: u32, text: &str) -> String {
    format!(
        "https://placehold.co/{width}x{height}/e5e7eb/6b7280?text={}",
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_items_urls() {
        let root = base("http://localhost:3000");
        assert_eq!(build_items_url(&root).as_str(), "http://localhost:3000/items/");
        assert_eq!(build_item_url(&root, 7).as_str(), "http://localhost:3000/items/7");
    }

    #[test]
    fn test_items_urls_keep_prefix() {
        let prefixed = base("http://localhost:8080/api/");
        assert_eq!(
            build_items_url(&prefixed).as_str(),
            "http://localhost:8080/api/items/"
        );
        assert_eq!(
            build_item_url(&prefixed, 12).as_str(),
            "http://localhost:8080/api/items/12"
        );
    }

    #[test]
    fn test_image_url_joins_paths() {
        assert_eq!(
            image_url("http://localhost:3000", "img/bed.jpg"),
            "http://localhost:3000/img/bed.jpg"
        );
        assert_eq!(
            image_url("http://localhost:3000/", "/img/bed.jpg"),
            "http://localhost:3000/img/bed.jpg"
        );
    }

    #[test]
    fn test_image_url_with_fallback() {
        assert_eq!(
            image_url_with_fallback("http://s", "img/a.jpg", Some("x.jpg")),
            "http://s/img/a.jpg"
        );
        assert_eq!(image_url_with_fallback("http://s", "", Some("x.jpg")), "x.jpg");
        assert_eq!(
            image_url_with_fallback("http://s", "", None),
            "https://placehold.co/400x400/e5e7eb/6b7280?text=No%20Image"
        );
    }

    #[test]
    fn test_placeholder_encodes_text() {
        assert_eq!(
            placeholder_image_url(200, 100, "Bed & Bath"),
            "https://placehold.co/200x100/e5e7eb/6b7280?text=Bed%20%26%20Bath"
        );
    }
}
