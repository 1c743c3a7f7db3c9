//! Resolve command - print the process descriptor without spawning
//!
//! Dry run of the launch pipeline: resolve the request, build the
//! descriptor, and write it to stdout as JSON.

use super::{load_settings, RequestArgs};
use anyhow::{Context, Result};
use jello_launch::{ProcessDescriptor, Resolver};
use std::path::Path;

pub fn run(config: Option<&Path>, args: RequestArgs) -> Result<i32> {
    let settings = load_settings(config)?;
    let (request, context) = args.into_request()?;

    let resolver = Resolver::from_env(settings.debugger.clone());
    let resolved = resolver.resolve(&request, &context)?;
    let descriptor = ProcessDescriptor::build(&resolved, &settings.debugger);

    let json =
        serde_json::to_string_pretty(&descriptor).context("failed to serialize descriptor")?;
    println!("{json}");

    Ok(0)
}
