use std::collections::HashSet;

/// Width of the hexadecimal suffix on every generated identifier.
pub const ID_SUFFIX_LEN: usize = 16;

/// Generate `prefix` followed by a random 16-digit uppercase hex suffix.
///
/// Not cryptographically secure and not guaranteed unique; use a
/// [`RefIdGenerator`] when ids must not collide within a run.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}{:0width$X}", rand::random::<u64>(), width = ID_SUFFIX_LEN)
}

/// Run-scoped `MessageRefId` / `DocRefId` generator.
///
/// Each id is `prefix` + 16 hex digits derived from a per-run seed and a
/// monotonic counter. The mixer is a bijection on `u64`, so no two ids
/// issued by one generator share a suffix, whatever their prefixes.
/// Uniqueness across runs is not guaranteed.
#[derive(Debug, Clone)]
pub struct RefIdGenerator {
    seed: u64,
    counter: u64,
    issued: HashSet<String>,
}

impl RefIdGenerator {
    /// Create a generator with a random seed.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a generator with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            counter: 0,
            issued: HashSet::new(),
        }
    }

    /// Issue the next identifier.
    pub fn next_id(&mut self, prefix: &str) -> String {
        loop {
            let suffix = mix(self.seed.wrapping_add(self.counter));
            self.counter = self.counter.wrapping_add(1);
            let id = format!("{prefix}{suffix:0width$X}", width = ID_SUFFIX_LEN);
            // Only reachable if the caller embeds hex in a prefix.
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

impl Default for RefIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// splitmix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
