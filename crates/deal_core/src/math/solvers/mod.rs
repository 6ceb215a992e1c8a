//! Boundary solvers for monotone scalar functions.
//!
//! Underwriting questions such as "how much vacancy can this deal absorb
//! before cash flow turns negative" reduce to locating the point where a
//! monotonically non-increasing function crosses zero. [`BoundarySolver`]
//! answers them by bisection, which only needs function evaluations and
//! always terminates within [`SolverConfig::max_iterations`].
//!
//! ## Configuration
//!
//! [`SolverConfig`] controls:
//! - `tolerance`: Final bracket width (default: 1e-4, one basis point)
//! - `max_iterations`: Iteration cap (default: 100)
//!
//! ## Example
//!
//! ```
//! use deal_core::math::solvers::{Boundary, BoundarySolver, SolverConfig};
//!
//! let solver = BoundarySolver::new(SolverConfig::default());
//!
//! // Cash flow falls by 10,000 per point of vacancy from a 2,500 start
//! let cash_flow = |vacancy: f64| 2_500.0 - 10_000.0 * vacancy;
//!
//! match solver.find_boundary(cash_flow, 0.0, 1.0).unwrap() {
//!     Boundary::Crossing(v) => assert!((v - 0.25).abs() <= 1e-4),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

mod bisection;
mod config;

pub use bisection::{Boundary, BoundarySolver};
pub use config::SolverConfig;
