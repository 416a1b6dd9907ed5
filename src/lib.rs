//! # wordpane
//!
//! Client for a text-analysis backend. It keeps the selectable list of
//! uploaded texts in sync and pages through each text's word-statistics
//! table one 50-row window at a time; new texts upload straight from a
//! plain-text file.
//!
//! The crate splits into the page [`controller`], plain session [`state`],
//! the HTTP [`net`] layer, and the [`ui`] binding implemented by the
//! bundled CLI and by test doubles.

pub mod controller;
pub mod net;
pub mod state;
pub mod ui;
