//! Tree-drawing character sets.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set the text renderers draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }
}

// ─── TreeChars ───────────────────────────────────────────────────────────────

/// Glyphs for outline trees and layer sections.
pub struct TreeChars {
    pub branch: &'static str, // ├──
    pub last: &'static str,   // └──
    pub pipe: &'static str,   // │ continuing a branch
    pub blank: &'static str,
    pub expanded: char,
    pub collapsed: char,
    pub cycle: &'static str,
    pub separator: &'static str,
}

impl TreeChars {
    pub fn unicode() -> Self {
        Self {
            branch: "├── ",
            last: "└── ",
            pipe: "│   ",
            blank: "    ",
            expanded: '▾',
            collapsed: '▸',
            cycle: "↺",
            separator: " · ",
        }
    }

    pub fn ascii() -> Self {
        Self {
            branch: "|-- ",
            last: "`-- ",
            pipe: "|   ",
            blank: "    ",
            expanded: 'v',
            collapsed: '>',
            cycle: "(cycle)",
            separator: " - ",
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }

    /// Connector for an entry, depending on whether it is its parent's last.
    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.last } else { self.branch }
    }

    /// Prefix continuation for an entry's own children.
    pub fn continuation(&self, is_last: bool) -> &'static str {
        if is_last { self.blank } else { self.pipe }
    }

    pub fn toggle(&self, expanded: bool) -> char {
        if expanded { self.expanded } else { self.collapsed }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
