use crate::host::{EditorHost, Resource};

/// Host resources released together at shutdown.
#[derive(Debug, Default)]
pub struct Disposables {
    resources: Vec<Resource>,
}

impl Disposables {
    pub fn push(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Release every resource in registration order, leaving the list
    /// empty. Returns how many were released.
    pub fn dispose_all<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let count = self.resources.len();
        for resource in self.resources.drain(..) {
            host.dispose(resource);
        }
        count
    }
}

impl Extend<Resource> for Disposables {
    fn extend<I: IntoIterator<Item = Resource>>(&mut self, iter: I) {
        self.resources.extend(iter);
    }
}
