// SPDX-License-Identifier: MPL-2.0
use crate::catalog::ProjectId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Reasons a catalog document is rejected at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The document is not valid TOML or does not match the catalog schema.
    Parse(String),

    /// A project lists no images, so it has neither a thumbnail nor anything
    /// to show in the viewer.
    EmptyImages { id: ProjectId },

    /// Two projects share the same identifier.
    DuplicateId(ProjectId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "invalid catalog: {}", msg),
            CatalogError::EmptyImages { id } => {
                write!(f, "project {} has no images", id)
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate project id {}", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::EmptyImages { id: 7 }.into();
        assert_eq!(format!("{}", err), "Catalog Error: project 7 has no images");
    }

    #[test]
    fn duplicate_id_display_names_the_id() {
        let err = CatalogError::DuplicateId(3);
        assert!(format!("{}", err).contains('3'));
    }
}
