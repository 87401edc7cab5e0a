/// Behavioral switches for the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryOptions {
    /// Close the read-then-write race with precondition-checked ledger
    /// writes. Off by default: the hosting runtime's endorsement step is
    /// normally what arbitrates conflicting writes, and not every store can
    /// evaluate preconditions.
    pub guarded_writes: bool,
}

impl RegistryOptions {
    pub fn guarded() -> Self {
        RegistryOptions {
            guarded_writes: true,
        }
    }
}
