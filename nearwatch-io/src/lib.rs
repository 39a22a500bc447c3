//! # NEARWATCH I/O
//!
//! The collaborator layer around `nearwatch-core`: loaders that turn
//! flat files into unlinked record collections, and writers that drain
//! a filtered approach stream back out.
//!
//! - [`extract::load_neos`] — NASA small-body CSV → [`NearEarthObject`]s.
//! - [`extract::load_approaches`] — NASA CAD JSON → [`CloseApproach`]es.
//! - [`write::write_csv`] / [`write::write_json`] — serialize a stream
//!   of linked approaches.
//!
//! The core assumes well-formed, fully-populated collections; all
//! malformed-input handling lives here.
//!
//! [`NearEarthObject`]: nearwatch_core::NearEarthObject
//! [`CloseApproach`]: nearwatch_core::CloseApproach

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extract;
pub mod time;
pub mod write;

pub use error::IoError;
pub use extract::{load_approaches, load_neos};
pub use write::{write_csv, write_json};
