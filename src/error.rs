use std::path::PathBuf;
use thiserror::Error;

use crate::models::Notice;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("{dependency} is not available ({remedy})")]
    MissingDependency {
        dependency: &'static str,
        remedy: &'static str,
    },

    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Encode(#[from] image::ImageError),
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, Self::MissingDependency { .. })
    }

    /// Turns the error into the status line printed at the top level.
    /// Every failure other than a missing dependency shares one generic notice.
    pub fn to_notice(&self) -> Notice {
        match self {
            Self::MissingDependency { dependency, remedy } => Notice::MissingDependency {
                dependency: dependency.to_string(),
                remedy: remedy.to_string(),
            },
            other => Notice::Failed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_mentions_path_and_cause() {
        let err = IconError::io(
            "icons/icon.png",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        let text = err.to_string();
        assert!(text.contains("icon.png"));
        assert!(text.contains("access denied"));
        assert!(!err.is_missing_dependency());
    }

    #[test]
    fn missing_dependency_keeps_its_own_notice() {
        let err = IconError::MissingDependency {
            dependency: "PNG encoder",
            remedy: "rebuild with the `png` feature of `image`",
        };
        assert!(err.is_missing_dependency());
        match err.to_notice() {
            Notice::MissingDependency { dependency, remedy } => {
                assert_eq!(dependency, "PNG encoder");
                assert!(remedy.contains("png"));
            }
            other => panic!("unexpected notice: {other:?}"),
        }
    }

    #[test]
    fn other_errors_collapse_into_failed() {
        let err = IconError::io("icons", io::Error::other("disk full"));
        assert!(matches!(err.to_notice(), Notice::Failed(reason) if reason.contains("disk full")));
    }
}
