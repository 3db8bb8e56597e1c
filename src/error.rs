use thiserror::Error;

/// Errors reported while building a [NavGrid](crate::NavGrid).
///
/// These are configuration errors: they surface at construction time, before
/// any search can run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("cell radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error(
        "degenerate grid: extent {extent_x}x{extent_z} with cell diameter {diameter} \
         yields {size_x}x{size_z} cells"
    )]
    Degenerate {
        extent_x: f32,
        extent_z: f32,
        diameter: f32,
        size_x: usize,
        size_z: usize,
    },
}
