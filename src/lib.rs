#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod point;
pub mod renderer;
pub mod shape;
pub mod state;

pub use app::DrawApp;
pub use color::Rgb;
pub use command::Command;
pub use error::{SceneError, ShapeError};
pub use input::{InputEvent, InputLocation};
pub use point::Point;
pub use renderer::{Canvas, Renderer};
pub use shape::{Shape, ShapeKind};
pub use state::{EditorContext, EditorState, Scene};
