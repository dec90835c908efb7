use crate::constants::{
    LINK_DISTANCE, LINK_MAX_OPACITY, PARTICLE_COUNT, PARTICLE_MAX_SPEED, PARTICLE_OPACITY_MAX,
    PARTICLE_OPACITY_MIN, PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN, REPULSION_RADIUS,
    REPULSION_STRENGTH,
};
use glam::Vec2;
use rand::Rng;

/// A drifting point in the 2D background field.
///
/// Fields:
/// - `pos`: position in canvas pixels
/// - `vel`: per-frame displacement before pointer repulsion
/// - `radius`: drawn circle radius
/// - `opacity`: random base opacity, scaled by theme at draw time
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// A line between two nearby particles, faded by distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Fixed-size set of particles living inside a `width` x `height` box.
///
/// Resizing replaces the whole set at fresh random positions rather than
/// rescaling the existing particles.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    pub pointer: Option<Vec2>,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let mut field = Self::default();
        field.regenerate(width, height, rng);
        field
    }

    pub fn regenerate<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| random_particle(self.width, self.height, rng))
            .collect();
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;
        for p in self.particles.iter_mut() {
            let start = p.pos;
            let mut delta = p.vel;
            if let Some(ptr) = pointer {
                delta += repulsion(p.pos, p.vel, ptr);
            }
            let moved = start + delta;

            if moved.x < 0.0 || moved.x > w {
                p.vel.x = -p.vel.x;
            }
            if moved.y < 0.0 || moved.y > h {
                p.vel.y = -p.vel.y;
            }
            p.pos = clamp_to(moved, w, h);

            // A wall can swallow the outward part of the push
            if let Some(ptr) = pointer {
                let clamped = p.pos != moved;
                if clamped && start.distance(ptr) < REPULSION_RADIUS {
                    p.pos = escape_along_walls(start, p.vel, ptr, w, h);
                }
            }
        }
    }

    /// Every pair closer than `LINK_DISTANCE`, with opacity falling off
    /// linearly to zero at the threshold.
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let d = pa.pos.distance(pb.pos);
                if d < LINK_DISTANCE {
                    out.push(Link {
                        a,
                        b: a + 1 + offset,
                        opacity: (1.0 - d / LINK_DISTANCE) * LINK_MAX_OPACITY,
                    });
                }
            }
        }
        out
    }
}

fn random_particle<R: Rng>(width: f32, height: f32, rng: &mut R) -> Particle {
    Particle {
        pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        vel: Vec2::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
        ),
        radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
        opacity: rng.gen_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX),
    }
}

/// Extra displacement applied to a particle at `pos` moving by `vel` while the
/// pointer sits at `pointer`.
///
/// Inside the radius the push is `(1 - d/r) * strength` away from the pointer,
/// and any part of the velocity step heading into the pointer is cancelled so
/// the net frame displacement always points away.
pub fn repulsion(pos: Vec2, vel: Vec2, pointer: Vec2) -> Vec2 {
    let offset = pos - pointer;
    let dist = offset.length();
    if dist >= REPULSION_RADIUS {
        return Vec2::ZERO;
    }
    let away = if dist > f32::EPSILON {
        offset / dist
    } else {
        vel.try_normalize().unwrap_or(Vec2::X)
    };
    let force = (1.0 - dist / REPULSION_RADIUS) * REPULSION_STRENGTH;
    let inward = vel.dot(away).min(0.0);
    away * (force - inward)
}

#[inline]
fn clamp_to(pos: Vec2, w: f32, h: f32) -> Vec2 {
    Vec2::new(pos.x.clamp(0.0, w), pos.y.clamp(0.0, h))
}

/// Move for a repelled particle whose push was cut short by the canvas edge.
///
/// Pushes along the away direction with the blocked axes removed. When the
/// pointer sits square in front of the wall (or in a corner) nothing of the
/// away direction is left, so the particle slides along the wall instead,
/// which still increases its distance to the pointer. Pinned in a corner
/// with the pointer on the diagonal it stays put.
fn escape_along_walls(start: Vec2, vel: Vec2, pointer: Vec2, w: f32, h: f32) -> Vec2 {
    let offset = start - pointer;
    let dist = offset.length();
    let away = offset
        .try_normalize()
        .unwrap_or_else(|| vel.try_normalize().unwrap_or(Vec2::X));
    let push = (1.0 - dist / REPULSION_RADIUS) * REPULSION_STRENGTH;

    let candidate = clamp_to(start + away * push, w, h);
    if (candidate - start).dot(away) > 0.0 {
        return candidate;
    }
    let mut slide = away.perp();
    if slide.dot(vel) < 0.0 {
        slide = -slide;
    }
    [slide, -slide]
        .into_iter()
        .map(|dir| clamp_to(start + dir * push, w, h))
        .find(|c| c.distance(pointer) > dist)
        .unwrap_or(start)
}

/// Theme-dependent multiplier applied to each particle's base opacity.
#[inline]
pub fn theme_opacity(dark: bool) -> f32 {
    if dark {
        1.0
    } else {
        0.6
    }
}

/// Fill used to fade the previous frame, leaving short motion trails.
#[inline]
pub fn trail_fill(dark: bool) -> &'static str {
    if dark {
        "rgba(10, 10, 20, 0.1)"
    } else {
        "rgba(248, 250, 252, 0.1)"
    }
}

#[inline]
pub fn rgba(rgb: [f32; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        (rgb[0] * 255.0).round() as u8,
        (rgb[1] * 255.0).round() as u8,
        (rgb[2] * 255.0).round() as u8,
        alpha.clamp(0.0, 1.0)
    )
}
