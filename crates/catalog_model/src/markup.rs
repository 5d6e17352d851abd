//! List markup rendering for the shared list container.

use crate::catalog::ItemList;

/// Renders `items` as concatenated `<li>` entries in list order, with no separators.
///
/// Item text is HTML-escaped so it always renders as text.
pub fn render_list_markup(items: &ItemList) -> String {
    let mut markup = String::new();
    for item in items.iter() {
        markup.push_str("<li>");
        push_escaped(&mut markup, item);
        markup.push_str("</li>");
    }
    markup
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
