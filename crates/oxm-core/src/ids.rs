use uuid::Uuid;

/// Allocates the two kinds of identifier a document build needs: opaque
/// unique strings usable as cross-reference keys, and a monotone ordinal
/// (`ea_localid`) used purely for display ordering.
///
/// One allocator lives for one pipeline invocation; it is passed by `&mut`
/// through the walk rather than held in a global.
#[derive(Debug, Default)]
pub struct IdentifierAllocator {
    local: u64,
}

impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `EAID_`-prefixed identifier for classes, attributes' owners and
    /// dependency edges.
    pub fn element_id(&self) -> String {
        prefixed("EAID")
    }

    /// `EAPK_`-prefixed package identifier.
    pub fn package_id(&self) -> String {
        prefixed("EAPK")
    }

    /// `MX_`-prefixed model identifier.
    pub fn model_id(&self) -> String {
        prefixed("MX")
    }

    /// Brace-wrapped GUID carried in `ea_guid` tagged values.
    pub fn guid(&self) -> String {
        format!("{{{}}}", Uuid::new_v4())
    }

    /// `attr_<n>` attribute identifier; consumes the shared counter.
    pub fn attribute_id(&mut self) -> String {
        format!("attr_{}", self.next_local())
    }

    /// Monotone ordinal starting at 1, shared across the whole build.
    /// Never reused within a run; carries no semantic meaning.
    pub fn next_local(&mut self) -> u64 {
        self.local += 1;
        self.local
    }
}

fn prefixed(prefix: &str) -> String {
    let id = Uuid::new_v4().to_string().replace('-', "_").to_uppercase();
    format!("{prefix}_{id}")
}
