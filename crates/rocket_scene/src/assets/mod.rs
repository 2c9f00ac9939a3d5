//! Asset loading: external meshes and textures

pub mod obj_loader;
pub mod image_loader;

pub use obj_loader::ObjLoader;
pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
///
/// Every variant carries the offending path (or `<memory>`) so a failure can
/// be diagnosed without re-running.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
