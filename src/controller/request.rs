//! Last-request-wins bookkeeping for overlapping provider calls.
//!
//! Every outgoing request of a kind takes a fresh generation; when its
//! response arrives it is applied only if no newer request of the same kind
//! has been issued (or the kind invalidated) in the meantime.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Search,
    Route,
}

/// Proof of issue for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    kind: RequestKind,
    generation: u64,
}

impl RequestToken {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    search: u64,
    route: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, kind: RequestKind) -> &mut u64 {
        match kind {
            RequestKind::Search => &mut self.search,
            RequestKind::Route => &mut self.route,
        }
    }

    pub fn current(&self, kind: RequestKind) -> u64 {
        match kind {
            RequestKind::Search => self.search,
            RequestKind::Route => self.route,
        }
    }

    /// Start a request, superseding any in flight of the same kind
    pub fn issue(&mut self, kind: RequestKind) -> RequestToken {
        let slot = self.slot(kind);
        *slot = slot.wrapping_add(1);
        RequestToken {
            kind,
            generation: *slot,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current(token.kind) == token.generation
    }

    /// Make every outstanding request of `kind` stale
    pub fn invalidate(&mut self, kind: RequestKind) {
        let slot = self.slot(kind);
        *slot = slot.wrapping_add(1);
    }

    pub fn invalidate_all(&mut self) {
        self.invalidate(RequestKind::Search);
        self.invalidate(RequestKind::Route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(RequestKind::Search);
        let second = tracker.issue(RequestKind::Search);

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tracker = RequestTracker::new();
        let search = tracker.issue(RequestKind::Search);
        let route = tracker.issue(RequestKind::Route);
        tracker.issue(RequestKind::Route);

        assert!(tracker.is_current(search));
        assert!(!tracker.is_current(route));
        assert_eq!(route.kind(), RequestKind::Route);
    }

    #[test]
    fn test_invalidate() {
        let mut tracker = RequestTracker::new();
        let search = tracker.issue(RequestKind::Search);
        let route = tracker.issue(RequestKind::Route);

        tracker.invalidate(RequestKind::Search);
        assert!(!tracker.is_current(search));
        assert!(tracker.is_current(route));

        tracker.invalidate_all();
        assert!(!tracker.is_current(route));
    }
}
