//! Rectangle geometry exercise.
//!
//! A plain value type with an area calculation. There is no shared state
//! anywhere: constructing a [`Rect`] allocates nothing and touches nothing
//! global, and `area` is an ordinary method on the value.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
///
/// Serializes as `{"width": ..., "height": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The area enclosed by the rectangle: `width * height`.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_width_times_height() {
        let rect = Rect::new(5.0, 10.0);
        assert!((rect.area() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_sized_rect_has_zero_area() {
        assert!(Rect::new(0.0, 7.0).area().abs() < f64::EPSILON);
        assert!(Rect::default().area().abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_sides() {
        let rect = Rect::new(2.5, 4.0);
        assert!((rect.area() - 10.0).abs() < f64::EPSILON);
    }
}
