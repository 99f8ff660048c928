pub mod greet;

use crate::error::CommandResult;

/// Dispatches execution to the greet command and returns the rendered line.
pub fn execute(args: &[String]) -> CommandResult<String> {
    tracing::debug!(target: "greeter::commands", count = args.len(), "building greeting");
    greet::greet(args.iter().cloned()).render()
}
