//! Renderers: text outline, layer list and SVG canvas.
//!
//! Renderers only read what the core produced. They never build hierarchy
//! or compute positions themselves.

pub mod charset;
pub mod outline;
pub mod svg;

pub use charset::{CharSet, TreeChars};
pub use outline::{LayerList, LayerOutline, TreeOutline};
pub use svg::SvgRenderer;

/// A renderer turns one input into a text document.
pub trait Renderer<T: ?Sized> {
    fn render(&self, input: &T) -> String;
}

/// `"1 Account"`, `"3 Accounts"`.
pub fn account_count(n: usize) -> String {
    if n == 1 {
        "1 Account".to_string()
    } else {
        format!("{} Accounts", n)
    }
}

/// Cut `s` to `max` characters and append `...` when it was longer.
pub fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_mod.rs"]
mod tests;
