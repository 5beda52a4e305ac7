//! Ordered, immutable collection of 4D points

use crate::Vec4;

/// An ordered sequence of 4D points.
///
/// A set is never edited in place: rotation produces a new set, so the
/// originally generated points stay available for every frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Vec4>,
}

impl PointSet {
    /// Create an empty point set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in order
    pub fn iter(&self) -> std::slice::Iter<'_, Vec4> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Vec4] {
        &self.points
    }

    /// Point at `index`, if any
    pub fn get(&self, index: usize) -> Option<Vec4> {
        self.points.get(index).copied()
    }
}

impl From<Vec<Vec4>> for PointSet {
    fn from(points: Vec<Vec4>) -> Self {
        Self { points }
    }
}

impl FromIterator<Vec4> for PointSet {
    fn from_iter<I: IntoIterator<Item = Vec4>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Vec4;
    type IntoIter = std::slice::Iter<'a, Vec4>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = PointSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn test_collect_keeps_order() {
        let set: PointSet = (0..4).map(|i| Vec4::new(i as f32, 0.0, 0.0, 0.0)).collect();
        assert_eq!(set.len(), 4);
        let xs: Vec<f32> = set.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(set.get(2), Some(Vec4::new(2.0, 0.0, 0.0, 0.0)));
    }
}
