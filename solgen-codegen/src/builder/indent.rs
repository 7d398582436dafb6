//! Indentation configuration for code generation.

const SPACES: &str = "                ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the Solidity style guide default.
    pub const SOLIDITY: Self = Self::Spaces(4);

    /// Widest supported space indentation.
    pub const MAX_SPACES: u8 = SPACES.len() as u8;

    /// Convert to the string representation for one indent level.
    ///
    /// Widths past [`Indent::MAX_SPACES`] are clamped.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..(*n).min(Self::MAX_SPACES) as usize],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SOLIDITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(0).as_str(), "");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_indent_clamps_wide_widths() {
        assert_eq!(Indent::Spaces(200).as_str().len(), Indent::MAX_SPACES as usize);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
