//! Error types for the viewer core

use thiserror::Error;

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while paginating, navigating or persisting state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The header alone does not fit on a page, or the capacity is not a finite number
    #[error("header height {header_height} does not fit page capacity {available_height}")]
    Capacity {
        header_height: f32,
        available_height: f32,
    },

    /// A measured height was negative or not finite (`row` is `None` for the header)
    #[error("invalid height {height} for {}", describe_row(.row))]
    InvalidHeight { row: Option<usize>, height: f32 },

    /// The external PDF exporter or printer failed
    #[error("export failed: {0}")]
    Export(String),

    /// The key-value store rejected a write
    #[error("storage error: {0}")]
    Storage(String),

    /// No section registered under this id
    #[error("unknown section id {0}")]
    UnknownSection(usize),

    /// Zoom input that is not a positive number
    #[error("invalid zoom level: {0:?}")]
    InvalidZoom(String),
}

fn describe_row(row: &Option<usize>) -> String {
    match row {
        Some(index) => format!("row {}", index),
        None => "header".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::Capacity {
            header_height: 120.0,
            available_height: 100.0,
        };
        assert_eq!(err.to_string(), "header height 120 does not fit page capacity 100");

        let err = Error::InvalidHeight {
            row: Some(3),
            height: -1.0,
        };
        assert_eq!(err.to_string(), "invalid height -1 for row 3");

        let err = Error::InvalidHeight {
            row: None,
            height: f32::NAN,
        };
        assert_eq!(err.to_string(), "invalid height NaN for header");
    }
}
