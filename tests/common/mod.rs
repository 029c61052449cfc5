// Shared test helpers. Expects the including test crate to provide
// `crate::core::surface`.

use crate::core::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
    },
}

/// Records every draw call; rejects negative radii like a real canvas.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn circles(&self) -> Vec<(Vec2, f32, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, color.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> anyhow::Result<()> {
        if radius < 0.0 {
            anyhow::bail!("negative radius {}", radius);
        }
        self.ops.push(Op::Circle {
            center,
            radius,
            color: color.to_string(),
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, _width: f32) {
        self.ops.push(Op::Line {
            from,
            to,
            color: color.to_string(),
        });
    }
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}
