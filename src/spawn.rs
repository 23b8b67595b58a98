/*
 * Spawn Module
 *
 * Random draws made when an agent is created or respawned. Agents enter the
 * arena from one of its four edges, each picked with equal probability,
 * and face a uniformly random heading. The order of draws is fixed (edge
 * selector, coordinate along the edge, then heading) so a seeded generator
 * reproduces the same population.
 */

use rand::Rng;

use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

// Pick a point on one of the four arena edges
pub fn edge_point<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Vector2 {
    let r: f64 = rng.gen();
    if r < 0.25 {
        Vector2::new(0.0, rng.gen::<f64>() * height)
    } else if r < 0.5 {
        Vector2::new(width, rng.gen::<f64>() * height)
    } else if r < 0.75 {
        Vector2::new(rng.gen::<f64>() * width, 0.0)
    } else {
        Vector2::new(rng.gen::<f64>() * width, height)
    }
}

// Uniform heading in [0, 360) degrees
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 360.0
}

// Which edge a point lies on, if any (left/right win at the corners)
pub fn edge_of(point: Vector2, width: f64, height: f64) -> Option<Edge> {
    let within_x = (0.0..=width).contains(&point.x);
    let within_y = (0.0..=height).contains(&point.y);
    if point.x == 0.0 && within_y {
        Some(Edge::Left)
    } else if point.x == width && within_y {
        Some(Edge::Right)
    } else if point.y == 0.0 && within_x {
        Some(Edge::Top)
    } else if point.y == height && within_x {
        Some(Edge::Bottom)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Error, RngCore, SeedableRng};

    // Replays a fixed list of unit-interval values through `gen::<f64>()`
    pub(crate) struct ScriptedRng {
        values: Vec<f64>,
        next: usize,
    }

    impl ScriptedRng {
        pub(crate) fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        // rand maps the top 53 bits of a u64 onto [0, 1)
        fn next_u64(&mut self) -> u64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            ((value * (1u64 << 53) as f64) as u64) << 11
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn selector_quarters_map_to_edges() {
        let cases = [
            (0.125, Vector2::new(0.0, 300.0)),
            (0.25, Vector2::new(800.0, 300.0)),
            (0.375, Vector2::new(800.0, 300.0)),
            (0.5, Vector2::new(400.0, 0.0)),
            (0.625, Vector2::new(400.0, 0.0)),
            (0.75, Vector2::new(400.0, 600.0)),
            (0.875, Vector2::new(400.0, 600.0)),
        ];
        for (selector, expected) in cases {
            let mut rng = ScriptedRng::new(&[selector, 0.5]);
            assert_eq!(edge_point(&mut rng, 800.0, 600.0), expected, "selector {}", selector);
        }
    }

    #[test]
    fn random_heading_scales_the_draw() {
        let mut rng = ScriptedRng::new(&[0.5]);
        assert_eq!(random_heading(&mut rng), 180.0);
        let mut rng = ScriptedRng::new(&[0.0]);
        assert_eq!(random_heading(&mut rng), 0.0);
    }

    #[test]
    fn sampled_points_always_lie_on_an_edge() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = Vec::new();
        for _ in 0..2000 {
            let point = edge_point(&mut rng, 800.0, 600.0);
            let edge = edge_of(point, 800.0, 600.0);
            assert!(edge.is_some(), "{:?} is not on an edge", point);
            seen.push(edge);
        }
        for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
            assert!(seen.contains(&Some(edge)));
        }
    }

    #[test]
    fn interior_and_outside_points_have_no_edge() {
        assert_eq!(edge_of(Vector2::new(400.0, 300.0), 800.0, 600.0), None);
        assert_eq!(edge_of(Vector2::new(900.0, 300.0), 800.0, 600.0), None);
        assert_eq!(edge_of(Vector2::new(0.0, 700.0), 800.0, 600.0), None);
    }
}
