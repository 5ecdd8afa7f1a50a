use collide2d::utils::math::perpendicular;
use collide2d::*;

fn main() {
    env_logger::init();

    let mut bodies = Arena::new();
    let mut targets = Vec::new();
    for (index, (center, radius)) in [
        (Vec3::new(6.0, 0.4, 0.0), 1.0),
        (Vec3::new(9.0, -1.2, 0.0), 0.8),
        (Vec3::new(12.5, 1.6, 0.0), 1.4),
    ]
    .into_iter()
    .enumerate()
    {
        let id = bodies.insert(RigidBody::default());
        let body = bodies.get_mut(id).unwrap();
        body.id = id;
        body.position = center;
        targets.push((id, CirclePrimitive::new(center, radius)));
        println!("target {index}: center {center:?} radius {radius}");
    }

    let detector = CollisionDetector::new();
    let mut contacts = contact_buffer();

    // A curtain of parallel rays offset sideways from the base line.
    let direction = Vec3::new(1.0, 0.05, 0.0);
    let sideways = perpendicular(direction).normalize();
    for step in -4..=4 {
        let origin = Vec3::ZERO + sideways * (step as f32 * 0.6);
        let ray = RayPrimitive::new(origin, direction);

        let mut closest: Option<Collision> = None;
        for (id, circle) in &targets {
            let count =
                detector.ray_circle_collision(&mut contacts, BodyId::NULL, *id, &ray, circle);
            if count == 1 {
                let hit = contacts[0];
                if closest.map_or(true, |best| hit.penetration < best.penetration) {
                    closest = Some(hit);
                }
            }
        }

        match closest {
            Some(hit) => println!(
                "ray {step:+}: hit body {:>3} at {:?} after {:.3} units",
                hit.body2.index(),
                hit.position,
                hit.penetration
            ),
            None => println!("ray {step:+}: no hit"),
        }
    }
}
