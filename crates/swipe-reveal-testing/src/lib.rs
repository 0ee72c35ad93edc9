//! Testing utilities and harness for swipe-reveal

pub mod host;
pub mod robot;
pub mod robot_assertions;

pub use host::*;
pub use robot::*;

pub mod prelude {
    pub use crate::host::RecordingHost;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
