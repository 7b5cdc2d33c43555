use crate::container::NodeContainer;
use crate::traits::AstarNode;

/// What an examiner or score provider may see of the running search.
///
/// A context only borrows the container; the driver builds a fresh one for
/// every call, so it never outlives a search.
#[derive(Clone, Copy)]
pub struct SearchContext<'a, N> {
    destination: N,
    container: &'a NodeContainer<N>,
}

impl<'a, N: AstarNode> SearchContext<'a, N> {
    pub fn new(destination: N, container: &'a NodeContainer<N>) -> Self {
        Self {
            destination,
            container,
        }
    }

    #[inline]
    pub fn destination(&self) -> N {
        self.destination
    }

    /// Parent of `node` in this search, if it has been reached.
    #[inline]
    pub fn parent(&self, node: N) -> Option<N> {
        self.container.parent(node)
    }

    #[inline]
    pub fn is_closed(&self, node: N) -> bool {
        self.container.is_closed(node)
    }

    #[inline]
    pub fn container(&self) -> &'a NodeContainer<N> {
        self.container
    }
}
