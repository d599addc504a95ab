use crate::geometry::DEFAULT_RESIZE_DEBOUNCE_MS;
use crate::Rotation;

/// Construction-time viewer configuration.
///
/// With the `serde` feature every field is optional in serialized form and
/// falls back to its default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ViewerOptions {
    /// Rotation applied at mount and whenever a new document is loaded
    pub initial_rotation: Rotation,
    /// Show the page/frame count readout
    pub show_page_count: bool,
    /// File name handed to the download trigger
    pub file_name: String,
    /// Show the loading placeholder instead of the document
    pub loading: bool,
    /// Content shown while loading
    pub loading_placeholder: String,
    /// Quiescence window for resize events
    pub resize_debounce_ms: u64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            initial_rotation: Rotation::Deg0,
            show_page_count: false,
            file_name: "download".to_string(),
            loading: false,
            loading_placeholder: "Loading...".to_string(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

impl ViewerOptions {
    /// Parse viewer options from a TOML string.
    ///
    /// ```rust,ignore
    /// let options = ViewerOptions::from_toml_str("initial_rotation = 90\nshow_page_count = true")?;
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> crate::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ViewerOptions::default();
        assert_eq!(options.initial_rotation, Rotation::Deg0);
        assert!(!options.show_page_count);
        assert_eq!(options.file_name, "download");
        assert!(!options.loading);
        assert_eq!(options.loading_placeholder, "Loading...");
        assert_eq!(options.resize_debounce_ms, 30);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn partial_toml() {
        let options =
            ViewerOptions::from_toml_str("initial_rotation = 270\nshow_page_count = true\n").unwrap();
        assert_eq!(options.initial_rotation, Rotation::Deg270);
        assert!(options.show_page_count);
        assert_eq!(options.file_name, "download");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn invalid_rotation_in_toml() {
        let err = ViewerOptions::from_toml_str("initial_rotation = 45").unwrap_err();
        assert!(matches!(err, crate::ViewerError::Config(_)));
    }
}
