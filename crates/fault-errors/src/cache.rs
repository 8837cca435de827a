//! One-shot status cache held by every variant.

use std::sync::OnceLock;

use fault_status::Status;

/// The envelope a variant was decoded from, or built on first `status()` call.
///
/// Two states: empty (freshly constructed) and filled (decoded, or built
/// once). Once filled it never changes. Concurrent first reads race on
/// `OnceLock::get_or_init`, so exactly one build is ever stored.
///
/// The cache does not participate in equality: two variants with equal
/// fields compare equal whether or not either has built its envelope.
#[derive(Debug, Clone, Default)]
pub struct StatusCache(OnceLock<Status>);

impl StatusCache {
    /// Empty cache for a freshly constructed variant.
    #[must_use]
    pub const fn empty() -> Self {
        Self(OnceLock::new())
    }

    /// Cache pre-filled with an envelope received from the wire.
    #[must_use]
    pub fn received(status: Status) -> Self {
        Self(OnceLock::from(status))
    }

    /// Return the cached envelope, building it first if absent.
    pub fn get_or_build(&self, build: impl FnOnce() -> Status) -> &Status {
        self.0.get_or_init(build)
    }

    #[must_use]
    pub fn get(&self) -> Option<&Status> {
        self.0.get()
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.0.get().is_some()
    }

    /// Take the cached envelope out, if any.
    #[must_use]
    pub fn into_inner(self) -> Option<Status> {
        self.0.into_inner()
    }
}

impl PartialEq for StatusCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StatusCache {}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_status::Code;

    #[test]
    fn builds_once() {
        let cache = StatusCache::empty();
        assert!(!cache.is_filled());

        let first = cache.get_or_build(|| Status::new(Code::Internal, "first")).clone();
        let second = cache.get_or_build(|| Status::new(Code::Internal, "second"));
        assert_eq!(first.message(), "first");
        assert_eq!(second.message(), "first");
        assert!(cache.is_filled());
    }

    #[test]
    fn received_is_never_rebuilt() {
        let cache = StatusCache::received(Status::new(Code::NotFound, "wire"));
        let status = cache.get_or_build(|| Status::new(Code::Internal, "rebuilt"));
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "wire");
    }

    #[test]
    fn clone_keeps_filled_state() {
        let cache = StatusCache::received(Status::new(Code::NotFound, "wire"));
        let cloned = cache.clone();
        assert_eq!(cloned.get().map(Status::message), Some("wire"));
        assert_eq!(cloned.into_inner().map(|s| s.code()), Some(Code::NotFound));
    }
}
