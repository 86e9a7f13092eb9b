//! Server-rendered list page
//!
//! One page template: a title box, one delete form per item (the checkbox
//! submits it) and an add form whose button carries the list title.

use std::fmt::Write;

use axum::response::Html;

use crate::models::Item;

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a list page for `list_title` with `items`.
pub fn render_list(list_title: &str, items: &[Item]) -> Html<String> {
    let title = escape(list_title);
    let mut rows = String::new();

    for item in items {
        // Writing to a String cannot fail
        let _ = write!(
            rows,
            r#"
      <form action="/delete" method="post">
        <div class="item">
          <input type="checkbox" name="checkbox" value="{id}" onchange="this.form.submit()">
          <p>{name}</p>
        </div>
        <input type="hidden" name="listName" value="{title}">
      </form>"#,
            id = item.id,
            name = escape(&item.name),
            title = title,
        );
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>To-Do List</title>
    <link rel="stylesheet" href="/static/css/styles.css">
  </head>
  <body>
    <div class="box" id="heading">
      <h1>{title}</h1>
    </div>
    <div class="box">{rows}
      <form class="item" action="/" method="post">
        <input type="text" name="newItem" placeholder="New Item" autocomplete="off">
        <button type="submit" name="list" value="{title}">+</button>
      </form>
    </div>
    <footer>Copyright {year}</footer>
  </body>
</html>
"#,
        title = title,
        rows = rows,
        year = chrono::Utc::now().format("%Y"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemName};

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn renders_title_items_and_forms() {
        let milk = Item::new(ItemName::new("milk").unwrap());
        let Html(page) = render_list("groceries", std::slice::from_ref(&milk));

        assert!(page.contains("<h1>groceries</h1>"));
        assert!(page.contains("<p>milk</p>"));
        assert!(page.contains(&format!(r#"name="checkbox" value="{}""#, milk.id)));
        assert!(page.contains(r#"<input type="hidden" name="listName" value="groceries">"#));
        assert!(page.contains(r#"<button type="submit" name="list" value="groceries">+</button>"#));
    }

    #[test]
    fn seed_text_is_escaped() {
        let item = Item::new(ItemName::new("<-- Hit this to delete an item").unwrap());
        let Html(page) = render_list("Today", &[item]);
        assert!(page.contains("<p>&lt;-- Hit this to delete an item</p>"));
    }

    #[test]
    fn empty_list_still_has_add_form() {
        let Html(page) = render_list("Today", &[]);
        assert!(page.contains(r#"name="newItem""#));
        assert!(!page.contains(r#"name="checkbox""#));
    }
}
