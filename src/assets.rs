use rust_embed::Embed;
use thiserror::Error;

pub const CV_URL: &str = "/docs/Tarasov_React_FE_CV.pdf";
pub const CV_FILE_NAME: &str = "Tarasov_React_FE_CV.pdf";

#[derive(Embed)]
#[folder = "public/icons"]
pub struct Icons;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Icon not found: {0}")]
    NotFound(String),
    #[error("Icon {0} is not valid UTF-8")]
    Encoding(String),
}

/// Inline SVG markup for the icon called `name` (without the `.svg` suffix).
pub fn icon_svg(name: &str) -> Result<String, AssetError> {
    let file = Icons::get(&format!("{name}.svg")).ok_or_else(|| AssetError::NotFound(name.to_string()))?;
    String::from_utf8(file.data.into()).map_err(|_| AssetError::Encoding(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_icons_are_embedded() {
        for name in ["hi", "star", "skills", "projects", "briefcase", "contacts", "refresh"] {
            let svg = icon_svg(name).unwrap_or_else(|e| panic!("{e}"));
            assert!(svg.contains("<svg"), "{name} should be an svg");
        }
    }

    #[test]
    fn test_missing_icon() {
        assert_eq!(
            icon_svg("does-not-exist"),
            Err(AssetError::NotFound("does-not-exist".to_string()))
        );
    }
}
