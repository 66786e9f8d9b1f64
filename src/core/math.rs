//! 2D vector math and center-anchored axis-aligned rectangles.

use std::ops::{Add, AddAssign, Mul, MulAssign};

/// A 2D vector in world units. The play field has y growing upwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

/// Axis-aligned rectangle stored as center position plus full size.
///
/// All edge comparisons are inclusive: a point on the border is contained and
/// rectangles that only touch intersect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Separating-axis test; true unless the two are apart on either axis.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.top() < other.bottom()
            || self.bottom() > other.top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_vector_arithmetic() {
        let mut v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, -1.0);
        assert_eq!(v, Vec2::new(4.0, 1.0));
        v *= 2.0;
        assert_eq!(v, Vec2::new(8.0, 2.0));
        v += Vec2::new(-8.0, 0.0);
        assert_eq!(v * 0.5, Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::new(2.0, 3.0).dot(Vec2::new(4.0, -1.0)), 5.0);
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        let n = v.normalized();
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let r = rect(10.0, 10.0, 4.0, 2.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(8.0, 9.0)));
        assert!(r.contains(Vec2::new(12.0, 11.0)));
        assert!(!r.contains(Vec2::new(12.1, 10.0)));
        assert!(!r.contains(Vec2::new(10.0, 8.9)));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b = rect(2.0, 0.0, 2.0, 2.0);
        assert!(a.intersects(&b));
        let c = rect(0.0, 2.0, 2.0, 2.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_separated_rects_do_not_intersect() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        assert!(!a.intersects(&rect(2.5, 0.0, 1.0, 1.0)));
        assert!(!a.intersects(&rect(0.0, -3.0, 2.0, 2.0)));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let rects = [
            rect(0.0, 0.0, 2.0, 2.0),
            rect(1.5, 1.5, 1.0, 1.0),
            rect(3.0, 0.0, 2.0, 2.0),
            rect(-5.0, 4.0, 10.0, 0.5),
            rect(0.0, 0.0, 0.0, 0.0),
            rect(400.0, 300.0, 60.0, 600.0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersects(b), b.intersects(a), "{:?} vs {:?}", a, b);
            }
        }
    }
}
