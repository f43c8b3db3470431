use multispline::{BoundaryCondition, Interpolant, SplineTable};

fn main() {
    let abscissa = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let position = vec![0.0, 1.8, 2.0, 1.2, 0.4, 0.0];
    let temperature = vec![20.0, 22.5, 26.0, 25.0, 21.5, 20.0];

    let mut table = SplineTable::new(abscissa, vec![position, temperature]).unwrap();
    for column in 0..table.columns() {
        table
            .set_up(column, BoundaryCondition::natural(), BoundaryCondition::natural())
            .unwrap();
    }

    println!("t;position;temperature");
    for i in 0..=50 {
        let t = 0.1 * i as f64;
        println!(
            "{:.1};{:.4};{:.4}",
            t,
            table.evaluate(0, t).unwrap().value,
            table.evaluate(1, t).unwrap().value
        );
    }

    for column in 0..table.columns() {
        println!(
            "column {}: integral over full range = {:.4}",
            column,
            table.integrate_full(column).unwrap()
        );
        for extremum in table.find_extrema(column).unwrap() {
            println!(
                "column {}: {:?} at x = {:.4}, value = {:.4}",
                column, extremum.kind, extremum.x, extremum.value
            );
        }
    }
}
