pub mod input;
pub mod navigation_manager;
pub mod viewer;
