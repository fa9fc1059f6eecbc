#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub routes_registered: usize,
    pub routes_overwritten: usize,
}

impl RegistryMetrics {
    /// `registered` routes took an index, `added` of them landed on a node
    /// that had no route yet.
    pub fn record(&mut self, registered: usize, added: usize) {
        self.routes_registered += registered;
        self.routes_overwritten += registered.saturating_sub(added);
    }
}
