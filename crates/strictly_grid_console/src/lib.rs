//! Console front end for Strictly Grid.
//!
//! - **Config**: TOML file, environment and flag layering
//! - **Input**: parsing of `x y` move coordinates
//! - **Render**: ASCII table view of the board
//! - **Session**: player registration and the render/prompt/apply loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod render;
mod session;

pub use config::{ConfigError, GameConfig, PlayerSeat, SIZE_ENV};
pub use input::{InputError, parse_coordinates, read_line};
pub use render::render_board;
pub use session::ConsoleSession;
