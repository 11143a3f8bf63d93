use rustc_hash::FxHashMap;

/// Hands out process-unique, non-null addresses for IR externals that have
/// no definition anywhere.
///
/// The JIT needs *some* address for every undefined symbol to finish
/// relocation, and the matcher needs those addresses to be distinct from
/// every real code address and from each other. Each fake address is a
/// leaked one-word heap allocation: the allocator guarantees uniqueness and
/// the heap guarantees separation from code. The allocations live for the
/// rest of the process, matching the JIT's lifetime.
#[derive(Debug, Default)]
pub struct FakeAddressAllocator {
    by_name: FxHashMap<String, u64>,
}

impl FakeAddressAllocator {
    pub fn new() -> FakeAddressAllocator {
        FakeAddressAllocator::default()
    }

    /// Allocate (or return the previously allocated) fake address for a
    /// symbol name.
    pub fn allocate(&mut self, name: &str) -> u64 {
        if let Some(addr) = self.by_name.get(name) {
            return *addr;
        }
        let addr = Box::leak(Box::new(0u64)) as *mut u64 as u64;
        self.by_name.insert(name.to_string(), addr);
        addr
    }

    pub fn address_of(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_non_null_and_unique() {
        let mut alloc = FakeAddressAllocator::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..64 {
            let addr = alloc.allocate(&format!("sym_{i}"));
            assert_ne!(addr, 0);
            assert!(seen.insert(addr), "fake address handed out twice");
        }
        assert_eq!(alloc.len(), 64);
    }

    #[test]
    fn same_name_gets_same_address() {
        let mut alloc = FakeAddressAllocator::new();
        let first = alloc.allocate("dep");
        let second = alloc.allocate("dep");
        assert_eq!(first, second);
        assert_eq!(alloc.len(), 1);
    }

    #[test]
    fn address_of_tracks_allocations() {
        let mut alloc = FakeAddressAllocator::new();
        assert_eq!(alloc.address_of("dep"), None);
        let addr = alloc.allocate("dep");
        assert_eq!(alloc.address_of("dep"), Some(addr));
    }
}
