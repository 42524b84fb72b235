pub mod config;
pub mod decompose;
pub mod group;
pub mod log;
pub mod rect;
pub mod scene;
pub mod sweep;

pub use decompose::{DecomposeError, Grid, decompose, min_buffer_len, try_decompose};
pub use group::group;
pub use rect::Rect;
pub use scene::{Scene, SceneIssue};
pub use sweep::MAX_BOXES;
