//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod user;
pub mod workout;

pub use user::{AuthSession, RegisterInput, UserService};
pub use workout::{NewWorkout, WorkoutService};
