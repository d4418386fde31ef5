//! Core data model for a touch drawing app: strokes recorded as straight
//! line segments. This crate holds only the passive value types - input
//! handling, rendering, and persistence live with the callers.

pub mod geom;
pub mod segment;

pub use geom::{Point, Rect, Vec2};
pub use segment::{InvalidGeometry, LineSegment};
