use glam::{Mat4, Vec3};
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tight box around a point set, `None` for an empty set or one with no finite points
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<AABB> {
        let mut bounds: Option<AABB> = None;
        for &p in points {
            if !p.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                Some(b) => b.expand_point(p),
                None => AABB::new(p, p),
            });
        }
        bounds
    }

    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn expand_point(&self, p: Vec3) -> AABB {
        AABB {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned box enclosing this box after `transform`
    pub fn transformed(&self, transform: &Mat4) -> AABB {
        let corners = self.corners().map(|c| transform.transform_point3(c));
        let mut out = AABB::new(corners[0], corners[0]);
        for &c in &corners[1..] {
            out = out.expand_point(c);
        }
        out
    }
}
