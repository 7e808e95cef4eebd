// Content change classification for cache invalidation

/// A single content mutation reported by a host editor: the text that was
/// inserted and the length of the span it replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    pub text: String,
    pub range_length: usize,
}

impl ContentChange {
    pub fn new(text: impl Into<String>, range_length: usize) -> Self {
        Self {
            text: text.into(),
            range_length,
        }
    }

    /// A change is meaningful when it inserted non-whitespace text or
    /// replaced a non-empty span. Pure-whitespace insertions into nothing
    /// (indentation, trailing newlines) leave cached explanations valid.
    pub fn is_meaningful(&self) -> bool {
        !self.text.trim().is_empty() || self.range_length > 0
    }

    /// Derive a change from two whole-document snapshots by trimming the
    /// common prefix and suffix, for hosts that only report saves. The
    /// inserted text is the differing middle of `new`; the range length is
    /// the differing middle of `old`.
    pub fn between(old: &str, new: &str) -> Self {
        let old_bytes = old.as_bytes();
        let new_bytes = new.as_bytes();

        let mut prefix = old_bytes
            .iter()
            .zip(new_bytes.iter())
            .take_while(|(a, b)| a == b)
            .count();
        // Back up to a char boundary
        while !old.is_char_boundary(prefix) {
            prefix -= 1;
        }

        let max_suffix = old.len().min(new.len()) - prefix;
        let mut suffix = old_bytes
            .iter()
            .rev()
            .zip(new_bytes.iter().rev())
            .take_while(|(a, b)| a == b)
            .count()
            .min(max_suffix);
        while !old.is_char_boundary(old.len() - suffix) {
            suffix -= 1;
        }

        Self {
            text: new[prefix..new.len() - suffix].to_string(),
            range_length: old[prefix..old.len() - suffix].chars().count(),
        }
    }
}
