//! Zoom factor of the page container

use crate::error::{Error, Result};

/// CSS transform origin applied together with the scale
pub const TRANSFORM_ORIGIN: &str = "top center";

/// Scale factor applied to the pages container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f32);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

impl Zoom {
    pub fn new(factor: f32) -> Result<Self> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Zoom(factor))
        } else {
            Err(Error::InvalidZoom(factor.to_string()))
        }
    }

    /// Parse the zoom select's value, e.g. `"0.75"`
    pub fn parse(value: &str) -> Result<Self> {
        let factor: f32 = value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidZoom(value.to_string()))?;
        Self::new(factor)
    }

    pub fn factor(self) -> f32 {
        self.0
    }

    /// Value for the container's `transform` property
    pub fn css_transform(self) -> String {
        format!("scale({})", self.0)
    }
}
