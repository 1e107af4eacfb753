// feedback-digest: weekly digest of GitHub issue feedback.
//
// This is the library root. Each module corresponds to one stage of the
// digest: fetching, caching, analysis, and rendering.

pub mod analysis;
pub mod config;
pub mod db;
pub mod github;
pub mod output;
pub mod pipeline;
pub mod status;
