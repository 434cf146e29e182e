/// Views for the editor window
///
/// Plain functions from state to widgets; all state changes go through
/// `Message` in main.rs.

pub mod grid;
pub mod nav;
pub mod viewer;
