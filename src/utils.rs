use tracing::error;

/// Runs the result of a user-supplied handler through a single choke point:
/// failures are logged and absorbed, never propagated, so one bad callback
/// cannot abort the rest of the cycle.
pub fn guard(context: &str, result: eyre::Result<()>) {
    if let Err(err) = result {
        error!(context, error = %err, "user callback failed");
    }
}
