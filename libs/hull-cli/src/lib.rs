//! # Hull CLI
//!
//! Shared plumbing for the `convex-hull` and `voronoi-edges` binaries.

use kinetic_hull::HullResult;
use std::io::Read;
use std::process::ExitCode;

/// Reads all of stdin into a string.
pub fn read_stdin() -> HullResult<String> {
    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;
    Ok(input)
}

/// Maps a run result to an exit code, reporting failures on stderr.
pub fn report(result: HullResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
