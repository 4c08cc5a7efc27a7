use crate::error::{NnError, NnResult};
use crate::layers::dense::LayerCache;

/// Intermediate values of one forward pass, one entry per computed layer.
///
/// Produced by `Network::forward` and consumed by `Network::backward` for the
/// same batch; it is not meant to outlive the iteration.
#[derive(Debug, Clone, Default)]
pub struct ForwardCache {
    layers: Vec<LayerCache>,
}

impl ForwardCache {
    pub(crate) fn with_capacity(capacity: usize) -> ForwardCache {
        ForwardCache { layers: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, cache: LayerCache) {
        self.layers.push(cache);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Cache of computed layer `l` (1-based).
    pub fn layer(&self, l: usize) -> NnResult<&LayerCache> {
        let last = self.layers.len();
        if l == 0 || l > last {
            return Err(NnError::LayerOutOfRange { index: l, last });
        }
        Ok(&self.layers[l - 1])
    }
}
