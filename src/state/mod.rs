/// State management module
///
/// This module handles all gallery state, including:
/// - Image records (data.rs)
/// - View state and the derived page view (view.rs)
/// - The modal viewer (modal.rs)
/// - The controller tying them together (controller.rs)

pub mod controller;
pub mod data;
pub mod modal;
pub mod view;
