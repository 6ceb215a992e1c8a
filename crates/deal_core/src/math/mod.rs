//! Numerical routines shared by the risk and optimisation layers.
//!
//! - `solvers`: Monotone boundary search by bisection

pub mod solvers;
