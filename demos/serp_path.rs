//! Samples a camera path through a handful of waypoints and prints it.
use serp::{serp, serp4, Bezier, IVec3, Vec3};

fn main() -> Result<(), serp::Error> {
    let waypoints = [
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(4.0, 6.0, -3.0),
        Vec3::new(9.0, 1.0, 2.0),
        Vec3::new(12.0, 3.0, 8.0),
        Vec3::new(16.0, 2.0, 10.0),
    ];
    let curve = Bezier::new(waypoints);

    let steps = 8;
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let p = serp(&waypoints, t)?;
        debug_assert_eq!(p, curve.eval(t));
        let cell: IVec3 = p.truncate_to_ivec3();
        println!(
            "t = {:.3}  position = ({:7.3}, {:7.3}, {:7.3})  cell = {:?}",
            t,
            p.x(),
            p.y(),
            p.z(),
            cell
        );
    }

    // a single cubic segment through the first four waypoints
    let [a, b, c, d, _] = waypoints;
    let mid = serp4(a, b, c, d, 0.5);
    println!("cubic midpoint: {:?}, heading {:?}", mid, a.direction_to(mid));

    // fewer than two points is rejected
    if let Err(e) = serp::<Vec3>(&waypoints[..1], 0.5) {
        println!("single waypoint: {}", e);
    }

    Ok(())
}
