/// What to do with an `<attribute>` under a restriction that has no
/// usable `ref`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MissingRefPolicy {
    /// Abort the whole decode with `MissingRequiredAttribute`.
    #[default]
    FailFast,
    /// Drop that element and keep decoding. The restriction keeps
    /// whatever attribute an earlier sibling resolved, if any.
    Skip,
}

/// Element nesting allowed by default. Real documents stay far below it.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    pub missing_ref: MissingRefPolicy,
    /// Deepest modeled element nesting the decoder descends into before
    /// failing with `DepthLimitExceeded`. Skipped subtrees do not count.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            missing_ref: MissingRefPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_missing_ref(mut self, policy: MissingRefPolicy) -> Self {
        self.missing_ref = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fail_fast() {
        let options = DecodeOptions::new();
        assert_eq!(options.missing_ref, MissingRefPolicy::FailFast);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn max_depth_setter() {
        assert_eq!(DecodeOptions::new().with_max_depth(8).max_depth, 8);
    }

    #[test]
    fn setter_overrides_policy() {
        let options = DecodeOptions::new().with_missing_ref(MissingRefPolicy::Skip);
        assert_eq!(options.missing_ref, MissingRefPolicy::Skip);
    }
}
