//! appicon-gen: procedural generator for the application icon
//!
//! The icon is a stack of sixteen rounded rectangles approximating a blue
//! gradient, two crossed ring outlines and a white glyph, rendered onto a
//! transparent 1024x1024 RGBA canvas and saved as PNG.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let written = appicon_gen::generate(Path::new(appicon_gen::DEFAULT_OUTPUT))?;
//! println!("✓ Wrote {}", written.display());
//! # Ok::<(), appicon_gen::IconError>(())
//! ```

pub mod error;
pub mod icon_gen;
pub mod raster;
pub mod shapes;

pub use error::IconError;
pub use icon_gen::{generate, render_icon, CANVAS_SIZE, DEFAULT_OUTPUT};
