use log::debug;

type Cleanup = Box<dyn FnOnce() + Send>;

/// Owner of the cleanup actions of one repository session.
///
/// Cleanups run in registration order, at most once, either on
/// [`Scope::dispose`] or when the scope is dropped.
#[derive(Default)]
pub struct Scope {
    cleanups: Vec<Cleanup>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, cleanup: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cleanups.push(Box::new(cleanup));
    }

    pub fn len(&self) -> usize {
        self.cleanups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleanups.is_empty()
    }

    pub fn dispose(&mut self) {
        if self.cleanups.is_empty() {
            return;
        }

        debug!("Disposing scope with {} cleanups", self.cleanups.len());
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("cleanups", &self.cleanups.len())
            .finish()
    }
}
