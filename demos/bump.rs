extern crate float_curve;

use float_curve::Curve;

fn main() {

    let mut curve = Curve::new(5).unwrap();
    curve.set_point(0, 0.0, 0.0, 0.0);
    curve.set_point(1, 1.0, 1.0, 0.0);
    curve.set_point(2, 2.0, 0.0, -1.0);
    curve.set_point(3, 4.0, -1.0, 0.0);
    curve.set_point(4, 5.0, 0.5, 1.0);
    curve.bake();

    let x_min = -1.0;
    let x_max = 6.0;
    let number_of_steps = 70;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.3}", x, curve.evaluate(x));
    }
}
