#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod description;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod layer;
pub mod panels;
pub mod placement;
pub mod region;
pub mod renderer;
pub mod snap;
pub mod state;
pub mod tools;
pub mod util;
pub mod widgets;

pub use app::SketchApp;
pub use command::{Command, CommandHistory};
pub use config::EditorConfig;
pub use description::{generate, CompositionDescription};
pub use document::Document;
pub use element::{Element, ElementId, ElementKind, Style};
pub use input::InputEvent;
pub use placement::{AssetInfo, AssetPlacement, PlacementSet};
pub use region::{LabeledRegion, RegionSet};
pub use renderer::Renderer;
pub use state::{CanvasSnapshot, EditorContext, EditorState};
pub use tools::Tool;
