use serde::{Deserialize, Serialize};

use crate::error::{CommandResult, GreeterError};

pub const GREETING: &str = "World";

/// The record echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub greeting: String,
    pub args: Vec<String>,
}

impl Greeting {
    /// Serializes the record as a single line of compact JSON, without the
    /// trailing newline.
    pub fn render(&self) -> CommandResult<String> {
        serde_json::to_string(self).map_err(GreeterError::Serialize)
    }
}

/// Builds the greeting for the provided arguments, kept in order.
pub fn greet<I, S>(args: I) -> Greeting
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    Greeting {
        greeting: GREETING.to_string(),
        args,
    }
}
