use std::fmt;
use std::path::PathBuf;

use super::ResourceId;

/// A track/thumb asset could not be produced.
///
/// These surface at setup time (construction or a `set_*_resource` call),
/// never from drawing or gesture handling.
#[derive(Debug)]
pub enum AssetError {
    /// No drawable is registered under this id.
    UnknownResource(ResourceId),
    /// The asset decoded but has no usable intrinsic size.
    NoIntrinsicSize { label: String, width: i32, height: i32 },
    /// Raster or SVG bytes could not be decoded.
    Decode { label: String, reason: String },
    /// The asset file could not be read.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::UnknownResource(id) => write!(f, "no drawable registered for resource {id}"),
            AssetError::NoIntrinsicSize { label, width, height } => {
                write!(f, "drawable '{label}' has no intrinsic size ({width}x{height})")
            }
            AssetError::Decode { label, reason } => {
                write!(f, "failed to decode drawable '{label}': {reason}")
            }
            AssetError::Io { path, source } => {
                write!(f, "failed to read drawable {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
