/// Single-line comment heuristic. A line counts as a comment only when its
/// first non-whitespace text is the prefix; comments that start mid-line
/// and block comments are not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComment {
    prefix: String,
}

impl Default for LineComment {
    fn default() -> Self {
        Self::new("//")
    }
}

impl LineComment {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_comment(&self, line: &str) -> bool {
        line.trim().starts_with(self.prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_slashes() {
        let c = LineComment::default();
        assert!(c.is_comment("// class GameEngine {"));
        assert!(c.is_comment("    \t// indented"));
        assert!(c.is_comment("///doc"));
    }

    #[test]
    fn test_not_a_comment() {
        let c = LineComment::default();
        assert!(!c.is_comment("int x; // trailing"));
        assert!(!c.is_comment("/* block */"));
        assert!(!c.is_comment("/ single"));
        assert!(!c.is_comment(""));
    }

    #[test]
    fn test_custom_prefix() {
        let c = LineComment::new("#");
        assert!(c.is_comment("  # note {"));
        assert!(!c.is_comment("// note"));
    }
}
