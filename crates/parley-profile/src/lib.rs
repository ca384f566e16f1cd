//! Profile, path resolution and file helpers shared by every parley crate

mod error;
mod io;
mod paths;
mod profile;

pub use error::ProfileError;
pub use io::atomic_write;
pub use paths::{Paths, HOME_ENV};
pub use profile::Profile;
