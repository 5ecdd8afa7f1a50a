use collide2d::utils::logging::ScopedTimer;
use collide2d::utils::math::{plane_angle, plane_rotation};
use collide2d::*;

fn main() {
    env_logger::init();

    let mut bodies = Arena::new();

    let crate_id = bodies.insert(RigidBody::with_pose(
        BodyId::default(),
        Vec3::new(0.0, 0.55, 0.0),
        plane_rotation(0.05),
    ));
    bodies.get_mut(crate_id).unwrap().id = crate_id;

    let ball_id = bodies.insert(RigidBody::with_pose(
        BodyId::default(),
        Vec3::new(1.05, 0.45, 0.0),
        Quat::IDENTITY,
    ));
    bodies.get_mut(ball_id).unwrap().id = ball_id;

    // Anchored scenery keeps a body record; bare world geometry does not.
    let wall_id = bodies.insert(RigidBody::fixed(
        BodyId::default(),
        Vec3::new(1.65, 0.5, 0.0),
        Quat::IDENTITY,
    ));
    bodies.get_mut(wall_id).unwrap().id = wall_id;

    // The floor is world geometry: no body record, just the null id.
    let floor = BoxPrimitive::axis_aligned(Vec3::new(0.0, -0.5, 0.0), 20.0, 0.5);

    let crate_body = bodies.get(crate_id).unwrap();
    let crate_shape = BoxPrimitive::new(crate_body.position, 0.6, 0.6, crate_body.orientation);
    let ball_body = bodies.get(ball_id).unwrap();
    let ball_shape = CirclePrimitive::new(ball_body.position, 0.5);
    let wall_body = bodies.get(wall_id).unwrap();
    let wall_shape = BoxPrimitive::new(wall_body.position, 0.15, 1.0, wall_body.orientation);

    println!(
        "scene: crate tilted {:.3} rad, ball r 0.5, anchored wall, world floor",
        plane_angle(crate_body.orientation)
    );

    let detector = CollisionDetector::new();
    let mut contacts = contact_buffer();

    let _timer = ScopedTimer::new("contact probe batch");

    let count =
        detector.box_box_collision(&mut contacts, crate_id, BodyId::NULL, &crate_shape, &floor);
    report("crate vs floor", &contacts, count);

    let count =
        detector.circle_box_collision(&mut contacts, ball_id, BodyId::NULL, &ball_shape, &floor);
    report("ball vs floor", &contacts, count);

    let count =
        detector.circle_box_collision(&mut contacts, ball_id, wall_id, &ball_shape, &wall_shape);
    report("ball vs wall", &contacts, count);
    if count > 0 && wall_body.is_static {
        println!("  the wall is anchored, so the ball absorbs the whole correction");
    }

    let count = detector.circle_box_collision(
        &mut contacts,
        ball_id,
        crate_id,
        &ball_shape,
        &crate_shape,
    );
    report("ball vs crate", &contacts, count);

    for contact in contacts.iter().take(count) {
        if contact.involves(ball_id) {
            println!(
                "ball touches a movable body: split the {:.4} push along {:?}",
                contact.penetration, contact.normal
            );
        }
    }
}

fn report(label: &str, contacts: &ContactBuffer, count: usize) {
    println!("{label}: {count} contact(s)");
    for contact in contacts.iter().take(count) {
        println!(
            "  position {:?}  normal {:?}  depth {:.4}",
            contact.position, contact.normal, contact.penetration
        );
    }
}
