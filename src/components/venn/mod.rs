//! Interactive Venn diagram: circle layout, overlap geometry, pointer
//! interaction and canvas drawing.

mod component;
mod config;
mod intersect;
mod layout;
mod listeners;
mod overlap;
mod render;
mod state;
mod types;

pub use component::VennCanvas;
pub use config::VennConfig;
pub use intersect::{ArcTo, BoundaryPath, Intersection, Lens, intersect};
pub use layout::place_circles;
pub use overlap::{LabelCatalog, LabelDeck, Overlap, OverlapRegion, PlacedLabel, find_overlaps};
pub use state::VennState;
pub use types::{Bounds, Circle, CircleRequest, Disk, Point, Viewport};
