//! Support shared by the `ringbox` and `scaling_report` binaries.

pub mod logging;
