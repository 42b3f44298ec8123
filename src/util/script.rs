const RESULT_PREFIX: &str = "Result: [";

/// Drop the trailing `Result: [...]` line the script console appends.
///
/// Only a newline-terminated final line counts.
pub(crate) fn strip_result_line(mut output: String) -> String {
    let Some(body) = output.strip_suffix('\n') else {
        return output;
    };
    let start = body.rfind('\n').map_or(0, |idx| idx + 1);
    if body[start..].starts_with(RESULT_PREFIX) {
        #[cfg(feature = "tracing")]
        tracing::debug!(line = %&body[start..], "dropping script console result line");
        output.truncate(start);
    }
    output
}
