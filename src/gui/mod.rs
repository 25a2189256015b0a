//! GUI module - egui window with one tab per config category

mod app;
mod components;
mod constants;
mod icon;
mod view;

pub use app::run_gui;
