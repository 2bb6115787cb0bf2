extern crate float_curve;

use float_curve::{ControlPoint, Curve};

fn main() {

    let x_points = [0.0, 0.5, 1.0, 2.0];

    let lift = Curve::with_points(
        x_points.iter().map(|x| ControlPoint::new(*x, 2.0 * x, 2.0)).collect()
    ).unwrap();

    let mut drag = Curve::with_points(
        x_points.iter().map(|x| ControlPoint::new(*x, x * x, 2.0 * x)).collect()
    ).unwrap();

    // total = 0.5 * drag + lift, over the same partitioning
    drag.scale(0.5);
    let mut total = drag.clone();
    total.add_curve(&lift).unwrap();

    println!("x;lift;drag;total");
    for i in 0..=20 {
        let x = 0.1 * i as f64;
        println!("{:.2};{:.3};{:.3};{:.3}", x, lift.evaluate(x), drag.evaluate(x), total.evaluate(x));
    }

    let short = Curve::new(2).unwrap();
    if let Err(error) = total.add_curve(&short) {
        println!("{}", error);
    }
}
