#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod style;
pub mod surface;
pub mod tools;

pub use app::GardenApp;
pub use error::{GardenError, GardenResult};
pub use input::{InputEvent, Redraw, route_event};
pub use renderer::Renderer;
pub use scene::{GardenObject, ObjectKind, Scene, SprinklerRange, Vertex};
pub use state::GardenState;
pub use style::GardenStyle;
pub use surface::{DrawOp, EguiSurface, RecordingSurface, Surface};
pub use tools::{Tool, Toolbar};
