//! Library of multi-column C2 cubic spline interpolation over a shared,
//! strictly increasing abscissa. Each column is an independent spline with
//! its own boundary conditions; evaluation yields value, first and second
//! derivative, and closed forms are used for local extrema and definite
//! integrals.
//!
//! # Example
//! ```
//! use multispline::{BoundaryCondition, Interpolant, SplineTable};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut table = SplineTable::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![vec![0.0, 1.0, 0.0, 1.0]],
//! ).unwrap();
//! table.set_up(0, BoundaryCondition::natural(), BoundaryCondition::natural()).unwrap();
//!
//! assert_approx_eq!(0.75, table.evaluate(0, 0.5).unwrap().value, 1e-9);
//! assert_approx_eq!(1.5, table.integrate_full(0).unwrap(), 1e-9);
//! assert_eq!(2, table.find_extrema(0).unwrap().len());
//! ```

mod boundary;
mod builder;
mod error;
mod evaluate;
mod extrema;
mod integrate;
mod interpolant;
mod locate;
mod solver;
mod table;

pub use boundary::BoundaryCondition;
pub use error::SplineError;
pub use evaluate::Evaluation;
pub use extrema::{Extremum, ExtremumKind};
pub use interpolant::Interpolant;
pub use solver::{LuSolver, TridiagonalSolver};
pub use table::{SplineTable, SplineTableView};
