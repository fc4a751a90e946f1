//! Anchor positions declared in markup as `data-x` / `data-y` / `data-z`.

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MarkupError {
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("attribute `{attribute}` is not a number: {value:?}")]
    NotANumber {
        attribute: &'static str,
        value: String,
    },
    #[error("attribute `{attribute}` is not finite: {value}")]
    NotFinite { attribute: &'static str, value: f32 },
}

/// Parse the three coordinate attributes of a hotspot element.
///
/// `None` means the attribute was absent. Surrounding whitespace is allowed.
pub fn parse_anchor_position(
    x: Option<&str>,
    y: Option<&str>,
    z: Option<&str>,
) -> Result<Vec3, MarkupError> {
    Ok(Vec3::new(
        parse_coord("data-x", x)?,
        parse_coord("data-y", y)?,
        parse_coord("data-z", z)?,
    ))
}

fn parse_coord(attribute: &'static str, raw: Option<&str>) -> Result<f32, MarkupError> {
    let raw = raw.ok_or(MarkupError::MissingAttribute(attribute))?;
    let value: f32 = raw.trim().parse().map_err(|_| MarkupError::NotANumber {
        attribute,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(MarkupError::NotFinite { attribute, value });
    }
    Ok(value)
}
