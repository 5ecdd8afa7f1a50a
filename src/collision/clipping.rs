use glam::Vec3;

/// Half-space boundary used while clipping contact edges against box faces.
///
/// Points with negative signed distance are on the kept (interior) side.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Plane of the box face lying `half_extent` along `normal` from
    /// `center`. `normal` must be unit length.
    pub fn face(center: Vec3, normal: Vec3, half_extent: f32) -> Self {
        Self {
            normal,
            distance: normal.dot(center) + half_extent,
        }
    }

    /// Signed distance from `point` to the plane, negative on the interior
    /// side.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Clips a segment against a plane, keeping the interior part.
///
/// Returns `None` when the segment lies entirely outside. Endpoint order is
/// preserved so repeated clips stay deterministic.
pub fn clip_edge(edge: [Vec3; 2], plane: Plane) -> Option<[Vec3; 2]> {
    let start_dist = plane.signed_distance(edge[0]);
    let end_dist = plane.signed_distance(edge[1]);

    match (start_dist <= 0.0, end_dist <= 0.0) {
        (true, true) => Some(edge),
        (false, false) => None,
        (true, false) => {
            let t = start_dist / (start_dist - end_dist);
            Some([edge[0], edge[0] + (edge[1] - edge[0]) * t])
        }
        (false, true) => {
            let t = start_dist / (start_dist - end_dist);
            Some([edge[0] + (edge[1] - edge[0]) * t, edge[1]])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_slab_plane(sign: f32) -> Plane {
        Plane::face(Vec3::ZERO, Vec3::new(sign, 0.0, 0.0), 1.0)
    }

    #[test]
    fn interior_segment_is_untouched() {
        let edge = [Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.5, 1.0, 0.0)];
        let clipped = clip_edge(edge, unit_slab_plane(1.0)).unwrap();
        assert_eq!(clipped, edge);
    }

    #[test]
    fn exterior_segment_is_rejected() {
        let edge = [Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 0.0)];
        assert!(clip_edge(edge, unit_slab_plane(1.0)).is_none());
    }

    #[test]
    fn straddling_segment_is_cut_at_the_plane() {
        let edge = [Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -2.0, 0.0)];
        let plane = Plane::face(Vec3::ZERO, Vec3::Y, 1.0);
        let clipped = clip_edge(edge, plane).unwrap();
        assert_eq!(clipped[0], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(clipped[1], Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn slab_clip_bounds_both_sides() {
        let edge = [Vec3::new(-3.0, 0.5, 0.0), Vec3::new(5.0, 0.5, 0.0)];
        let clipped = clip_edge(edge, unit_slab_plane(1.0))
            .and_then(|edge| clip_edge(edge, unit_slab_plane(-1.0)))
            .unwrap();
        assert_eq!(clipped[0], Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(clipped[1], Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn endpoint_on_the_plane_is_kept() {
        let edge = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)];
        let clipped = clip_edge(edge, unit_slab_plane(1.0)).unwrap();
        assert_eq!(clipped, edge);
    }
}
