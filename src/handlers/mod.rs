//! Renderers for view state changes

pub mod console;

pub use console::ConsoleRenderer;
