use std::ffi::OsString;

use crate::error::{CommandResult, GreeterError};

/// Converts the raw process arguments into owned strings.
///
/// Order and count are preserved exactly; nothing is parsed or filtered, so
/// flag-like values such as `--help` or `--` come through untouched. The
/// first argument that is not valid unicode aborts collection.
pub fn collect_args<I>(argv: I) -> CommandResult<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    let args = argv
        .into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|raw| {
                let lossy = raw.to_string_lossy().into_owned();
                tracing::warn!(target: "greeter::cli", index, value = %lossy, "rejecting argument");
                GreeterError::InvalidArgument { index, lossy }
            })
        })
        .collect::<CommandResult<Vec<_>>>()?;

    tracing::debug!(target: "greeter::cli", count = args.len(), "collected arguments");
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let args = collect_args(os(&["prog", "b", "a", "b"])).unwrap();
        assert_eq!(args, vec!["prog", "b", "a", "b"]);
    }

    #[test]
    fn passes_flag_like_values_through() {
        let args = collect_args(os(&["prog", "--", "--help", "-x", ""])).unwrap();
        assert_eq!(args, vec!["prog", "--", "--help", "-x", ""]);
    }

    #[test]
    fn accepts_empty_input() {
        let args = collect_args(Vec::new()).unwrap();
        assert!(args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_unicode_argument() {
        use std::os::unix::ffi::OsStringExt;

        let argv = vec![
            OsString::from("prog"),
            OsString::from("ok"),
            OsString::from_vec(vec![b'a', 0xff]),
        ];

        let err = collect_args(argv).unwrap_err();
        match err {
            GreeterError::InvalidArgument { index, lossy } => {
                assert_eq!(index, 2);
                assert_eq!(lossy, "a\u{fffd}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
