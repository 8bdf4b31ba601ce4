//! Region quadtree for "who is near this point" queries
//!
//! The tree maps 2-D points to opaque payloads and answers axis-aligned
//! rectangular range queries. Leaves hold up to [`Quadtree::LEAF_CAPACITY`]
//! points and subdivide lazily on overflow. The population rebuilds the tree
//! from scratch every tick, so there is no removal and no incremental update;
//! a fresh tree per tick can never serve stale positions.

use crate::core::types::Vec2;

/// Axis-aligned rectangle stored as center plus half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub cx: f32,
    pub cy: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Rect {
    pub fn new(cx: f32, cy: f32, half_w: f32, half_h: f32) -> Self {
        Self { cx, cy, half_w, half_h }
    }

    /// Rectangle spanning `[0, width] x [0, height]`
    pub fn from_extent(width: f32, height: f32) -> Self {
        Self::new(width / 2.0, height / 2.0, width / 2.0, height / 2.0)
    }

    pub fn left(&self) -> f32 {
        self.cx - self.half_w
    }

    pub fn right(&self) -> f32 {
        self.cx + self.half_w
    }

    pub fn top(&self) -> f32 {
        self.cy - self.half_h
    }

    pub fn bottom(&self) -> f32 {
        self.cy + self.half_h
    }

    /// Half-open containment: `min <= p < max` on both axes.
    ///
    /// Every interior point of a parent rectangle belongs to exactly one of
    /// its four quadrants, so no point is dropped on a quadrant seam.
    pub fn contains(&self, point: Vec2) -> bool {
        self.left() <= point.x
            && point.x < self.right()
            && self.top() <= point.y
            && point.y < self.bottom()
    }

    /// Inclusive AABB overlap: touching edges count as intersecting.
    ///
    /// Deliberately less strict than `contains` so a query window whose edge
    /// grazes a node boundary still descends into that node.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }
}

/// A stored point: a 2-D coordinate plus an opaque payload
#[derive(Debug, Clone, Copy)]
pub struct Point<T> {
    pub pos: Vec2,
    pub item: T,
}

/// One quadtree node; the root doubles as the public handle
///
/// A node is a leaf (no children, at most `LEAF_CAPACITY` points) or an
/// internal node with exactly four children covering its quadrants. On
/// subdivision the existing points are pushed down into the children, so a
/// parent's list is empty once children exist.
#[derive(Debug)]
pub struct Quadtree<T> {
    boundary: Rect,
    points: Vec<Point<T>>,
    children: Option<Box<[Quadtree<T>; 4]>>,
}

impl<T: Copy> Quadtree<T> {
    /// Points a leaf holds before subdividing (tunable, not load-bearing)
    pub const LEAF_CAPACITY: usize = 4;

    pub fn new(boundary: Rect) -> Self {
        Self {
            boundary,
            points: Vec::new(),
            children: None,
        }
    }

    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    /// Number of points stored in this node and all descendants
    pub fn len(&self) -> usize {
        let child_count: usize = self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(|c| c.len())
            .sum();
        self.points.len() + child_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a point, returning false if it lies outside this node's boundary
    pub fn insert(&mut self, pos: Vec2, item: T) -> bool {
        if !self.boundary.contains(pos) {
            return false;
        }

        if self.children.is_none() {
            if self.points.len() < Self::LEAF_CAPACITY {
                self.points.push(Point { pos, item });
                return true;
            }
            self.subdivide();
        }

        match self.children.as_mut() {
            Some(children) => Self::insert_into_children(children, Point { pos, item }),
            None => false,
        }
    }

    /// Split into four quadrants and redistribute the resident points
    fn subdivide(&mut self) {
        let b = self.boundary;
        let hw = b.half_w / 2.0;
        let hh = b.half_h / 2.0;
        let mut children = Box::new([
            Quadtree::new(Rect::new(b.cx - hw, b.cy - hh, hw, hh)), // NW
            Quadtree::new(Rect::new(b.cx + hw, b.cy - hh, hw, hh)), // NE
            Quadtree::new(Rect::new(b.cx - hw, b.cy + hh, hw, hh)), // SW
            Quadtree::new(Rect::new(b.cx + hw, b.cy + hh, hw, hh)), // SE
        ]);

        // Half-open quadrant boundaries guarantee a home for every resident.
        for point in std::mem::take(&mut self.points) {
            Self::insert_into_children(&mut children, point);
        }
        self.children = Some(children);
    }

    fn insert_into_children(children: &mut [Quadtree<T>; 4], point: Point<T>) -> bool {
        for child in children.iter_mut() {
            if child.insert(point.pos, point.item) {
                return true;
            }
        }
        false
    }

    /// Collect all points inside `region` into `out`
    ///
    /// Nodes whose boundary does not intersect the region are pruned; the
    /// surviving candidates are filtered point by point.
    pub fn query(&self, region: &Rect, out: &mut Vec<Point<T>>) {
        if !self.boundary.intersects(region) {
            return;
        }
        for point in &self.points {
            if region.contains(point.pos) {
                out.push(*point);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(region, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tree() -> Quadtree<usize> {
        Quadtree::new(Rect::from_extent(100.0, 100.0))
    }

    #[test]
    fn test_contains_half_open() {
        let rect = Rect::from_extent(100.0, 100.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(99.999, 99.999)));
        // High edges are excluded
        assert!(!rect.contains(Vec2::new(100.0, 50.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_seam_point_lands_in_exactly_one_quadrant() {
        let parent = Rect::from_extent(100.0, 100.0);
        let hw = parent.half_w / 2.0;
        let hh = parent.half_h / 2.0;
        let quadrants = [
            Rect::new(parent.cx - hw, parent.cy - hh, hw, hh),
            Rect::new(parent.cx + hw, parent.cy - hh, hw, hh),
            Rect::new(parent.cx - hw, parent.cy + hh, hw, hh),
            Rect::new(parent.cx + hw, parent.cy + hh, hw, hh),
        ];
        // Dead center of the parent sits on every quadrant seam
        let seam = Vec2::new(50.0, 50.0);
        let homes = quadrants.iter().filter(|q| q.contains(seam)).count();
        assert_eq!(homes, 1);
    }

    #[test]
    fn test_intersects_inclusive_of_touching_edges() {
        let a = Rect::new(50.0, 50.0, 10.0, 10.0);
        let touching = Rect::new(70.0, 50.0, 10.0, 10.0);
        let apart = Rect::new(80.1, 50.0, 10.0, 10.0);
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_insert_outside_boundary_fails() {
        let mut tree = unit_tree();
        assert!(!tree.insert(Vec2::new(150.0, 50.0), 0));
        assert!(!tree.insert(Vec2::new(-1.0, 50.0), 0));
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_insert_and_len() {
        let mut tree = unit_tree();
        for i in 0..10 {
            let offset = i as f32 * 7.3;
            assert!(tree.insert(Vec2::new(5.0 + offset, 3.0 + offset), i));
        }
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_subdivision_redistributes_points() {
        let mut tree = unit_tree();
        // Fill one leaf past capacity with points in distinct quadrants
        let positions = [
            Vec2::new(10.0, 10.0),
            Vec2::new(90.0, 10.0),
            Vec2::new(10.0, 90.0),
            Vec2::new(90.0, 90.0),
            Vec2::new(40.0, 40.0),
        ];
        for (i, pos) in positions.iter().enumerate() {
            assert!(tree.insert(*pos, i));
        }
        // Post-subdivision the parent list is empty and nothing was lost
        assert!(tree.children.is_some());
        assert!(tree.points.is_empty());
        assert_eq!(tree.len(), positions.len());
    }

    #[test]
    fn test_query_matches_brute_force() {
        let mut tree = unit_tree();
        let mut stored = Vec::new();
        // Deterministic pseudo-grid scatter
        for i in 0..60usize {
            let x = (i as f32 * 13.7) % 100.0;
            let y = (i as f32 * 29.3) % 100.0;
            let pos = Vec2::new(x, y);
            assert!(tree.insert(pos, i));
            stored.push(Point { pos, item: i });
        }

        let region = Rect::new(45.0, 55.0, 20.0, 25.0);
        let mut found = Vec::new();
        tree.query(&region, &mut found);

        let mut expected: Vec<usize> = stored
            .iter()
            .filter(|p| region.contains(p.pos))
            .map(|p| p.item)
            .collect();
        let mut got: Vec<usize> = found.iter().map(|p| p.item).collect();
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_query_disjoint_region_is_empty() {
        let mut tree = unit_tree();
        for i in 0..8 {
            tree.insert(Vec2::new(10.0 + i as f32, 10.0), i);
        }
        let region = Rect::new(80.0, 80.0, 5.0, 5.0);
        let mut found = Vec::new();
        tree.query(&region, &mut found);
        assert!(found.is_empty());
    }
}
