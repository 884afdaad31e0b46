//! Errors raised while constructing scenes or loading configuration.
//! Runtime interaction never fails: an unbound callback or a pointer outside
//! every widget is a silent no-op.

use crate::scene::SceneId;

#[derive(Debug)]
pub enum Error {
    /// (x1, y1, x2, y2) where x1 >= x2 or y1 >= y2
    DegenerateRect(i32, i32, i32, i32),
    /// (min, max) of a slider where min >= max
    EmptyRange(f64, f64),
    /// a slider was declared after a non-slider widget. (scene, widget index)
    SliderOrdering(SceneId, usize),
    /// a configuration value the simulation cannot run with
    InvalidConfig(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateRect(x1, y1, x2, y2) => write!(
                f,
                "rectangle ({x1},{y1})-({x2},{y2}) has no area, corners must satisfy x1<x2 and y1<y2"
            ),
            Self::EmptyRange(min, max) => {
                write!(f, "slider range {min}..{max} is empty, min must be below max")
            }
            Self::SliderOrdering(scene, index) => write!(
                f,
                "slider #{index} in scene \"{}\" follows a non-slider widget, sliders must come first",
                scene.name()
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Json(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
