extern crate float_curve;

use float_curve::{ControlPoint, Curve};
use nalgebra::Vector3;

fn main() {

    let x_min = 0.0;
    let x_max = 6.0;

    let curve = Curve::with_points(vec![
        ControlPoint::flat(x_min, 1.0),
        Vector3::new(1.0, -1.0, 0.5).into(),
        Vector3::new(2.0, 0.0, 1.5).into(),
        Vector3::new(4.0, 3.0, 0.0).into(),
        Vector3::new(5.0, 1.0, -1.0).into(),
        ControlPoint::new(x_max, 1.0, -1.0),
    ]).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps)
        .map(|i| x_min + step * i as f64)
        .collect();

    let result = curve.batch_evaluate(&x_vector);

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}
