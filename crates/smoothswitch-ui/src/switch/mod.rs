//! Switch interaction logic, independent of drawing.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`button`] | `Checkable` contract and the stock `CompoundButton` |
//! | [`config`] | `SwitchConfig` tunables |
//! | [`animation`] | settle duration, interpolators, cancellable `SettleTask` |
//! | [`gesture`] | single-tap classification with touch slop |
//! | [`controller`] | `SwitchController`: thumb position state machine |

pub mod animation;
pub mod button;
pub mod config;
pub mod controller;
pub mod gesture;

pub use animation::{Interpolator, SettleTask, Step, TaskId};
pub use button::{Checkable, CompoundButton};
pub use config::SwitchConfig;
pub use controller::{Phase, SwitchController, MIN_POSITION};
pub use gesture::GestureDetector;
