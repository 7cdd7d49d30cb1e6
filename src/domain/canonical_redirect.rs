/// Handle used to change the current location of the client.
pub trait Navigator {
    /// Identity of this handle. A redirect bound to one handle runs again when
    /// it is handed a handle with a different identity.
    fn handle_id(&self) -> u64;

    /// Navigate to `to`, overwriting the current history entry.
    fn replace(&mut self, to: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectState {
    Pending,
    Redirecting { handle_id: u64 },
    Done,
}

/// Forwards a section without a view of its own to its canonical child.
///
/// The redirect fires once per lifetime: repeated runs with the same
/// navigator are ignored, a different navigator replays the navigation.
#[derive(Debug)]
pub struct CanonicalRedirect {
    target: &'static str,
    state: RedirectState,
}

impl CanonicalRedirect {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            state: RedirectState::Pending,
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn state(&self) -> RedirectState {
        self.state
    }

    /// A loading indicator is shown for as long as this is `true`.
    pub fn is_pending(&self) -> bool {
        !matches!(self.state, RedirectState::Done)
    }

    /// Run the redirect after the page has been mounted.
    /// Returns `true` if a navigation was issued.
    pub fn run(&mut self, navigator: &mut impl Navigator) -> bool {
        let handle_id = navigator.handle_id();
        match self.state {
            RedirectState::Done => false,
            RedirectState::Redirecting { handle_id: bound } if bound == handle_id => false,
            RedirectState::Pending | RedirectState::Redirecting { .. } => {
                tracing::debug!(redirect_to = self.target, handle_id, "Replacing location");
                navigator.replace(self.target);
                self.state = RedirectState::Redirecting { handle_id };
                true
            }
        }
    }

    /// The client has arrived at the target. A server rendered page ends with
    /// its response and never reaches this; a client driving the redirect
    /// calls it once the location has changed.
    pub fn complete(&mut self) {
        if let RedirectState::Redirecting { .. } = self.state {
            self.state = RedirectState::Done;
        }
    }

    /// The page went away before the redirect ran. Nothing is navigated
    /// afterwards.
    pub fn unmount(&mut self) {
        self.state = RedirectState::Done;
    }
}
