//! Runtime fallback discovery for albums missing from the manifest.
//!
//! There is no directory-listing API on a static file server, so this
//! probes a bounded set of conventional file names instead. It is a
//! heuristic: it trades completeness for a bounded number of network
//! round trips.

mod patterns;
mod probe;

pub use patterns::candidate_names;
pub use probe::discover_album_images;
