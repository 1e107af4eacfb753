// GitHub API access: the issue supplier for the digest pipeline.
//
// Each submodule handles one area: the HTTP client and issue listing.

pub mod client;
pub mod issues;
