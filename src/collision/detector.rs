//! Stateless narrow-phase pair queries.
//!
//! Every query writes contacts into the leading slots of a caller-supplied
//! [`ContactBuffer`] and returns how many slots it filled. Nothing is
//! allocated and nothing can fail: a query either produces contacts or
//! reports zero. When a box-box query yields two contacts they are ordered
//! by ascending penetration depth.
//!
//! The two id parameters tag the output records. Their meaning is
//! call-order for every query except box-box, where attribution follows the
//! clipping roles (see [`CollisionDetector::box_box_collision`]).

use glam::Vec3;
use log::trace;

use crate::{
    collision::{
        clipping::{clip_edge, Plane},
        contact::{Collision, ContactBuffer},
        primitives::{BoxPrimitive, CirclePrimitive, RayPrimitive},
    },
    config::COLLISION_EPSILON,
    utils::allocator::BodyId,
};

/// Narrow-phase collision detector.
///
/// Carries no state, so a single instance can be shared freely across
/// threads as long as each caller brings its own output buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionDetector;

impl CollisionDetector {
    pub fn new() -> Self {
        Self
    }

    /// Tests two circles for overlap.
    ///
    /// Writes at most one contact: the normal points from `circle1` toward
    /// `circle2` and the position sits on the surface of `circle1` along the
    /// normal. Exact surface touch counts as a miss.
    pub fn circle_circle_collision(
        &self,
        collisions: &mut ContactBuffer,
        body1: BodyId,
        body2: BodyId,
        circle1: &CirclePrimitive,
        circle2: &CirclePrimitive,
    ) -> usize {
        let delta = circle2.position - circle1.position;
        let combined = circle1.radius + circle2.radius;
        let distance_squared = delta.length_squared();
        if distance_squared >= combined * combined {
            return 0;
        }

        let distance = distance_squared.sqrt();
        let normal = if distance > COLLISION_EPSILON {
            delta / distance
        } else {
            // Coincident centers leave the direction unconstrained; report a
            // fixed axis so the caller still receives a unit normal.
            trace!("circle-circle centers coincide, using +X normal");
            Vec3::X
        };

        collisions[0] = Collision {
            position: circle1.position + normal * circle1.radius,
            normal,
            penetration: combined - distance,
            body1,
            body2,
        };
        1
    }

    /// Tests two oriented boxes using the separating axis theorem.
    ///
    /// The four candidate axes are the face normals of both boxes. If any
    /// axis separates the projections (to within the shared tolerance) there
    /// is no contact. Otherwise the axis of least overlap picks a reference
    /// box, the opposing face of the other box is clipped against the
    /// reference face's side planes, and every clipped endpoint inside the
    /// reference face becomes a contact.
    ///
    /// Attribution follows the clipping roles rather than argument order:
    /// `body1` of each record is the incident box's id and `body2` the
    /// reference box's id, with the normal pointing out of the reference
    /// face toward the incident box. Two contacts come out sorted by
    /// ascending penetration.
    pub fn box_box_collision(
        &self,
        collisions: &mut ContactBuffer,
        body1: BodyId,
        body2: BodyId,
        box1: &BoxPrimitive,
        box2: &BoxPrimitive,
    ) -> usize {
        let (a_x, a_y) = box1.axes();
        let (b_x, b_y) = box2.axes();
        let axes = [a_x, a_y, b_x, b_y];
        let delta = box2.position - box1.position;

        let mut overlaps = [0.0f32; 4];
        for (overlap, axis) in overlaps.iter_mut().zip(axes.iter()) {
            *overlap = box1.projected_radius(*axis) + box2.projected_radius(*axis)
                - delta.dot(*axis).abs();
            if *overlap <= COLLISION_EPSILON {
                return 0;
            }
        }

        let best = select_penetration_axis(&axes, &overlaps, delta);

        // The box owning the winning axis donates the reference face; the
        // other box donates the edge that gets clipped against it.
        let (reference, incident, reference_body, incident_body) = if best < 2 {
            (box1, box2, body1, body2)
        } else {
            (box2, box1, body2, body1)
        };

        let mut normal = axes[best];
        if normal.dot(incident.position - reference.position) < 0.0 {
            normal = -normal;
        }

        let (reference_x, reference_y) = reference.axes();
        let (face_half, side_axis, side_half) = if best % 2 == 0 {
            (reference.half_width, reference_y, reference.half_height)
        } else {
            (reference.half_height, reference_x, reference.half_width)
        };

        let mut edge = incident_edge(incident, normal);
        for side in [side_axis, -side_axis] {
            edge = match clip_edge(edge, Plane::face(reference.position, side, side_half)) {
                Some(clipped) => clipped,
                None => return 0,
            };
        }

        let face = Plane::face(reference.position, normal, face_half);
        let mut count = 0;
        for point in edge {
            let depth = -face.signed_distance(point);
            if depth > 0.0 {
                collisions[count] = Collision {
                    position: point,
                    normal,
                    penetration: depth,
                    body1: incident_body,
                    body2: reference_body,
                };
                count += 1;
            }
        }

        if count == 2 && collisions[0].penetration > collisions[1].penetration {
            collisions.swap(0, 1);
        }
        count
    }

    /// Tests a circle against an oriented box.
    ///
    /// Writes at most one contact with the normal pointing from the circle
    /// toward the box. The position is the box-surface point nearest the
    /// circle center; when the center is inside the box the contact resolves
    /// through the nearest face.
    pub fn circle_box_collision(
        &self,
        collisions: &mut ContactBuffer,
        body1: BodyId,
        body2: BodyId,
        circle: &CirclePrimitive,
        shape: &BoxPrimitive,
    ) -> usize {
        match circle_box_contact(circle, shape) {
            Some((position, outward, penetration)) => {
                collisions[0] = Collision {
                    position,
                    normal: -outward,
                    penetration,
                    body1,
                    body2,
                };
                1
            }
            None => 0,
        }
    }

    /// Box-first flavor of [`Self::circle_box_collision`].
    ///
    /// Produces the same contact point and depth with the normal negated
    /// (pointing from the box toward the circle); the id slots keep their
    /// call-order meaning.
    pub fn box_circle_collision(
        &self,
        collisions: &mut ContactBuffer,
        body1: BodyId,
        body2: BodyId,
        shape: &BoxPrimitive,
        circle: &CirclePrimitive,
    ) -> usize {
        match circle_box_contact(circle, shape) {
            Some((position, outward, penetration)) => {
                collisions[0] = Collision {
                    position,
                    normal: outward,
                    penetration,
                    body1,
                    body2,
                };
                1
            }
            None => 0,
        }
    }

    /// Casts a ray against a circle.
    ///
    /// Writes at most one contact at the smallest non-negative hit distance;
    /// a tangent graze counts as a hit and a circle behind the origin does
    /// not. The record reuses the contact layout: `position` is the hit
    /// point, `normal` the outward surface normal there, and `penetration`
    /// the world distance from the origin to the hit.
    pub fn ray_circle_collision(
        &self,
        collisions: &mut ContactBuffer,
        body1: BodyId,
        body2: BodyId,
        ray: &RayPrimitive,
        circle: &CirclePrimitive,
    ) -> usize {
        let length_squared = ray.direction.length_squared();
        if length_squared <= COLLISION_EPSILON * COLLISION_EPSILON {
            trace!("ray direction is degenerate, skipping cast");
            return 0;
        }

        let to_origin = ray.origin - circle.position;
        let half_b = to_origin.dot(ray.direction);
        let c = to_origin.length_squared() - circle.radius * circle.radius;
        let discriminant = half_b * half_b - length_squared * c;
        if discriminant < 0.0 {
            return 0;
        }

        let sqrt_disc = discriminant.sqrt();
        let mut t = (-half_b - sqrt_disc) / length_squared;
        if t < 0.0 {
            t = (-half_b + sqrt_disc) / length_squared;
        }
        if t < 0.0 {
            return 0;
        }

        let length = length_squared.sqrt();
        let position = ray.point_at(t);
        let offset = position - circle.position;
        let normal = if circle.radius > COLLISION_EPSILON {
            offset / circle.radius
        } else {
            -ray.direction / length
        };

        collisions[0] = Collision {
            position,
            normal,
            penetration: t * length,
            body1,
            body2,
        };
        1
    }
}

/// Picks the axis of least overlap out of the four face normals.
///
/// Overlaps within the shared tolerance of each other count as tied. Ties
/// prefer the axis better aligned with the center offset and fall back to
/// the lower index, so a contact sliding along a face cannot flip its
/// normal between nearly identical configurations.
fn select_penetration_axis(axes: &[Vec3; 4], overlaps: &[f32; 4], delta: Vec3) -> usize {
    let mut best = 0;
    for candidate in 1..4 {
        if overlaps[candidate] + COLLISION_EPSILON < overlaps[best] {
            best = candidate;
        } else if (overlaps[candidate] - overlaps[best]).abs() <= COLLISION_EPSILON
            && axes[candidate].dot(delta).abs() > axes[best].dot(delta).abs() + COLLISION_EPSILON
        {
            best = candidate;
        }
    }
    best
}

/// Endpoints of the incident box face most opposed to `normal`.
fn incident_edge(incident: &BoxPrimitive, normal: Vec3) -> [Vec3; 2] {
    let (local_x, local_y) = incident.axes();
    let dot_x = local_x.dot(normal);
    let dot_y = local_y.dot(normal);

    let (face_axis, face_dot, face_half, edge_axis, edge_half) = if dot_x.abs() >= dot_y.abs() {
        (local_x, dot_x, incident.half_width, local_y, incident.half_height)
    } else {
        (local_y, dot_y, incident.half_height, local_x, incident.half_width)
    };

    let center = incident.position - face_axis * face_half.copysign(face_dot);
    [center + edge_axis * edge_half, center - edge_axis * edge_half]
}

/// Shared circle-versus-box test in the box's local frame.
///
/// Returns the contact position, the outward direction from the box toward
/// the circle, and the penetration depth.
fn circle_box_contact(circle: &CirclePrimitive, shape: &BoxPrimitive) -> Option<(Vec3, Vec3, f32)> {
    let local = shape.to_local(circle.position);
    let clamped = Vec3::new(
        local.x.clamp(-shape.half_width, shape.half_width),
        local.y.clamp(-shape.half_height, shape.half_height),
        local.z,
    );

    let offset = local - clamped;
    let distance_squared = offset.length_squared();

    if distance_squared > COLLISION_EPSILON * COLLISION_EPSILON {
        // Center outside the box: nearest feature is the clamped surface point.
        if distance_squared >= circle.radius * circle.radius {
            return None;
        }
        let distance = distance_squared.sqrt();
        let outward = shape.orientation * (offset / distance);
        return Some((
            shape.to_world(clamped),
            outward,
            circle.radius - distance,
        ));
    }

    // Center inside (or on) the box: push out through the nearest face.
    let slack_x = shape.half_width - local.x.abs();
    let slack_y = shape.half_height - local.y.abs();
    let (face_normal, face_depth, surface) = if slack_x <= slack_y {
        let sign = if local.x < 0.0 { -1.0 } else { 1.0 };
        (
            Vec3::new(sign, 0.0, 0.0),
            slack_x,
            Vec3::new(sign * shape.half_width, local.y, local.z),
        )
    } else {
        let sign = if local.y < 0.0 { -1.0 } else { 1.0 };
        (
            Vec3::new(0.0, sign, 0.0),
            slack_y,
            Vec3::new(local.x, sign * shape.half_height, local.z),
        )
    };

    let penetration = face_depth + circle.radius;
    if penetration <= 0.0 {
        return None;
    }

    Some((
        shape.to_world(surface),
        shape.orientation * face_normal,
        penetration,
    ))
}
