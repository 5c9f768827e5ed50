/// Classification for retry policy.
///
/// Tells a caller whether issuing the same fetch again later could succeed.
/// The fetcher itself only retries throttled requests against the global
/// chart feed; anything surfaced as an error has already been through that.
///
/// | Class | Worth retrying later? |
/// |-------|-----------------------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, after waiting |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - the provider rejected the request or returned garbage.
    /// Repeating the identical call will fail the same way.
    Never,

    /// Retry after a pause.
    ///
    /// Used when the provider kept throttling us or the connection itself
    /// failed. Neither says anything about the request being wrong.
    WithBackoff,
}
