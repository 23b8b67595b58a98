/*
 * Vector Module
 *
 * This module defines Vector2, the immutable 2D value type used for agent
 * positions, heading vectors and centroids. Every operation returns a new
 * vector; the fallible ones report DivisionByZero or UndefinedOperation
 * instead of producing NaN.
 */

use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{FlockError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, n: f64) -> Vector2 {
        Vector2::new(self.x * n, self.y * n)
    }

    pub fn divide(self, n: f64) -> Result<Vector2> {
        if n == 0.0 {
            return Err(FlockError::DivisionByZero);
        }
        Ok(Vector2::new(self.x / n, self.y / n))
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    // Euclidean norm
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vector2) -> f64 {
        self.sub(other).magnitude()
    }

    pub fn normalize(self) -> Result<Vector2> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(FlockError::UndefinedOperation("normalize of a zero vector"));
        }
        Ok(Vector2::new(self.x / magnitude, self.y / magnitude))
    }

    /// Cosine of the angle between two vectors.
    pub fn cosine_similarity(self, other: Vector2) -> Result<f64> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return Err(FlockError::UndefinedOperation(
                "cosine similarity with a zero vector",
            ));
        }
        Ok(self.dot(other) / denominator)
    }

    // Mean of a set of points, None when the set is empty
    pub fn centroid(points: &[Vector2]) -> Option<Vector2> {
        points
            .iter()
            .copied()
            .sum::<Vector2>()
            .divide(points.len() as f64)
            .ok()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::sub(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::zero(), Vector2::add)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}
