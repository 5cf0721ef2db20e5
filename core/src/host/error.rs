//! Error types for host lookups and display

use thiserror::Error;

use super::WorldPoint;

/// Errors while resolving scene data for a tile
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene is not loaded")]
    NotLoaded,

    #[error("tile ({}, {}, {}) is outside the loaded scene", .tile.x, .tile.y, .tile.plane)]
    OutOfBounds { tile: WorldPoint },
}

/// Errors while pushing text to the client
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("local player is not available")]
    NoLocalPlayer,

    #[error("display sink rejected message: {reason}")]
    Rejected { reason: String },
}
