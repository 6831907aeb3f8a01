use leptos::prelude::*;

/// Consistency checks collected while strict mode is active.
#[derive(Clone, Copy)]
pub struct StrictChecks {
    violations: RwSignal<Vec<String>>,
}

impl StrictChecks {
    pub fn new() -> Self {
        Self {
            violations: RwSignal::new(Vec::new()),
        }
    }

    /// Messages recorded so far.
    pub fn violations(&self) -> Vec<String> {
        self.violations.get()
    }

    fn record(&self, message: String) {
        tracing::warn!("strict mode: {message}");
        self.violations.update(|v| v.push(message));
    }
}

impl Default for StrictChecks {
    fn default() -> Self {
        Self::new()
    }
}

/// Development-only wrapper enabling extra checks for its descendants.
///
/// Release builds render the children untouched.
#[component]
pub fn StrictMode(children: Children) -> impl IntoView {
    if cfg!(debug_assertions) {
        provide_context(StrictChecks::new());
        tracing::debug!("strict mode checks enabled");
    }

    children()
}

/// Strict checks of the enclosing `StrictMode`, if enabled.
pub fn use_strict_checks() -> Option<StrictChecks> {
    use_context::<StrictChecks>()
}

/// Called by a provider before it provides `T`: flags the provider when a
/// `T` is already visible from where it renders.
///
/// Component bodies share their parent's owner, so this catches a provider
/// nested in another one as well as a later sibling under the same owner.
/// Either way the new context shadows the existing one for descendants.
pub fn check_unique_provider<T: Clone + 'static>(name: &str) {
    let Some(checks) = use_strict_checks() else {
        return;
    };

    if use_context::<T>().is_some() {
        checks.record(format!(
            "another <{name}> is already visible here; this one shadows its context"
        ));
    }
}
