use multispline::{BoundaryCondition, Interpolant, SplineTable};

fn main() {
    let abscissa = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let values = vec![0.0, 0.8, 0.9, 0.1, -0.8];

    let mut natural = SplineTable::new(abscissa.clone(), vec![values.clone()]).unwrap();
    natural
        .set_up(0, BoundaryCondition::natural(), BoundaryCondition::natural())
        .unwrap();

    let mut clamped = SplineTable::new(abscissa, vec![values]).unwrap();
    clamped
        .set_up(0, BoundaryCondition::Clamped(1.0), BoundaryCondition::Clamped(-1.0))
        .unwrap();

    println!("x;natural;clamped");
    for i in 0..=40 {
        let x = 0.1 * i as f64;
        println!(
            "{:.1};{:.4};{:.4}",
            x,
            natural.evaluate(0, x).unwrap().value,
            clamped.evaluate(0, x).unwrap().value
        );
    }

    println!(
        "natural curvature at ends: {:.4}, {:.4}",
        natural.curvature(0)[0],
        natural.curvature(0)[4]
    );
    println!(
        "clamped slope at ends: {:.4}, {:.4}",
        clamped.evaluate(0, 0.0).unwrap().first_derivative,
        clamped.evaluate(0, 4.0).unwrap().first_derivative
    );
}
