pub mod quadtree;

pub use quadtree::{Point, Quadtree, Rect};
