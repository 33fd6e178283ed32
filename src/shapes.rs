//! Shapes with a computed area
//!
//! New shapes implement `Shape`; consumers such as `print_shape_area` take
//! `&dyn Shape` and never look at the concrete type.

use std::f64::consts::PI;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Anything with an area
pub trait Shape {
    fn area(&self) -> f64;
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Inputs are not validated; negative or NaN sides give a negative or NaN area
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    #[inline]
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Circle given by its radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Write `Area: <value>` for any shape
pub fn write_shape_area(out: &mut dyn Write, shape: &dyn Shape) -> io::Result<()> {
    writeln!(out, "Area: {}", shape.area())
}

/// Print `Area: <value>` to stdout
pub fn print_shape_area(shape: &dyn Shape) {
    if let Err(e) = write_shape_area(&mut io::stdout().lock(), shape) {
        log::warn!("Failed to print area: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn area_line(shape: &dyn Shape) -> String {
        let mut out = Vec::new();
        write_shape_area(&mut out, shape).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dimensions_are_kept() {
        let rect = Rectangle::new(5.0, 10.0);
        assert_eq!((rect.width(), rect.height()), (5.0, 10.0));
        assert_eq!(Circle::new(7.0).radius(), 7.0);
    }

    #[test]
    fn test_print_shape_area_stdout() {
        print_shape_area(&Rectangle::new(2.0, 3.0));
        print_shape_area(&Circle::new(1.0));
    }

    #[test]
    fn test_rectangle_area() {
        assert_eq!(Rectangle::new(5.0, 10.0).area(), 50.0);
        assert_eq!(Rectangle::new(0.0, 10.0).area(), 0.0);
    }

    #[test]
    fn test_circle_area() {
        let area = Circle::new(7.0).area();
        assert!((area - 153.938_040_025_899_85).abs() < 1e-9);
        assert_eq!(Circle::new(0.0).area(), 0.0);
    }

    #[test]
    fn test_area_line_any_variant() {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Rectangle::new(5.0, 10.0)), Box::new(Circle::new(1.0))];

        assert_eq!(area_line(shapes[0].as_ref()), "Area: 50\n");
        assert_eq!(area_line(shapes[1].as_ref()), format!("Area: {}\n", PI));
    }

    #[test]
    fn test_new_variant_plugs_in() {
        struct Square(f64);
        impl Shape for Square {
            fn area(&self) -> f64 {
                self.0 * self.0
            }
        }

        assert_eq!(area_line(&Square(3.0)), "Area: 9\n");
    }

    #[test]
    fn test_negative_inputs_are_not_rejected() {
        assert_eq!(Rectangle::new(-2.0, 3.0).area(), -6.0);
        // Squared radius keeps the circle non-negative
        assert!(Circle::new(-1.0).area() > 0.0);
    }

    #[test]
    fn test_shape_serde() {
        let json = serde_json::to_string(&Circle::new(2.5)).unwrap();
        assert_eq!(json, r#"{"radius":2.5}"#);
        let rect: Rectangle = serde_json::from_str(r#"{"width":2.0,"height":4.0}"#).unwrap();
        assert_eq!(rect.width(), 2.0);
        assert_eq!(rect.height(), 4.0);
        assert_eq!(rect.area(), 8.0);
    }

    proptest! {
        #[test]
        fn prop_rectangle_area_is_product(w in 0.0f64..1e6, h in 0.0f64..1e6) {
            let rect = Rectangle::new(w, h);
            prop_assert_eq!(rect.area(), w * h);
            prop_assert!(rect.area() >= 0.0);
        }

        #[test]
        fn prop_circle_area_formula(r in 0.0f64..1e6) {
            let circle = Circle::new(r);
            prop_assert_eq!(circle.area(), PI * r * r);
            prop_assert!(circle.area() >= 0.0);
        }
    }
}
