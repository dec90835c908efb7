use crate::constants::{
    AUTO_ROTATE_X, AUTO_ROTATE_Y, CAMERA_FOVY_DEG, CAMERA_Z, POINTER_ROTATION_SCALE,
    POINT_FIELD_SPIN, ROTATION_DAMPING,
};
use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Rotation state of the decorative solid and the surrounding point field.
///
/// `rotation` and `target` hold (pitch, yaw) in radians.
#[derive(Clone, Debug, Default)]
pub struct SceneMotion {
    pub rotation: Vec2,
    pub target: Vec2,
    pub field_spin: f32,
}

impl SceneMotion {
    /// Point the target rotation at a pointer given in normalized device
    /// coordinates (-1..1 on both axes, y up).
    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        self.target = Vec2::new(ndc.y, ndc.x) * POINTER_ROTATION_SCALE;
    }

    /// Constant auto-rotation plus an exponential pursuit of the target.
    pub fn step(&mut self) {
        self.rotation += Vec2::new(AUTO_ROTATE_X, AUTO_ROTATE_Y);
        self.rotation += (self.target - self.rotation) * ROTATION_DAMPING;
        self.field_spin += POINT_FIELD_SPIN;
    }

    pub fn solid_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation.y) * Mat4::from_rotation_x(self.rotation.x)
    }

    pub fn field_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.field_spin)
    }
}

/// Map a client-space pointer position to normalized device coordinates.
#[inline]
pub fn client_to_ndc(x: f64, y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        ((x / width) * 2.0 - 1.0) as f32,
        -((y / height) * 2.0 - 1.0) as f32,
    )
}

/// Regular icosahedron of the given circumradius.
pub fn icosahedron_vertices(radius: f32) -> Vec<Vec3> {
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let raw = [
        (-1.0, phi, 0.0),
        (1.0, phi, 0.0),
        (-1.0, -phi, 0.0),
        (1.0, -phi, 0.0),
        (0.0, -1.0, phi),
        (0.0, 1.0, phi),
        (0.0, -1.0, -phi),
        (0.0, 1.0, -phi),
        (phi, 0.0, -1.0),
        (phi, 0.0, 1.0),
        (-phi, 0.0, -1.0),
        (-phi, 0.0, 1.0),
    ];
    raw.iter()
        .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * radius)
        .collect()
}

/// Edges of the icosahedron as vertex index pairs: every pair sitting at the
/// minimum vertex distance.
pub fn icosahedron_edges(vertices: &[Vec3]) -> Vec<(usize, usize)> {
    let mut min_d = f32::MAX;
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            min_d = min_d.min(a.distance(*b));
        }
    }
    let tol = min_d * 1e-3;
    let mut edges = Vec::new();
    for (i, a) in vertices.iter().enumerate() {
        for (j, b) in vertices.iter().enumerate().skip(i + 1) {
            if (a.distance(*b) - min_d).abs() <= tol {
                edges.push((i, j));
            }
        }
    }
    edges
}

/// Flattened line-list vertices for the wireframe solid.
pub fn wireframe_lines(radius: f32) -> Vec<[f32; 3]> {
    let verts = icosahedron_vertices(radius);
    icosahedron_edges(&verts)
        .into_iter()
        .flat_map(|(a, b)| [verts[a].to_array(), verts[b].to_array()])
        .collect()
}

/// Uniformly scatter `count` points in a cube of the given half-extent.
pub fn scatter_points<R: Rng>(count: usize, half_extent: f32, rng: &mut R) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
            ]
        })
        .collect()
}
