//! UI binding: the surface trait the controller renders through, plus the
//! terminal implementation used by the CLI.

pub mod console;
pub mod surface;
