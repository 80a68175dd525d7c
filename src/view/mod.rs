//! HTML fragment rendering for the htmx client.
//!
//! Each function returns exactly the DOM subtree the client swaps in: a
//! single row after add/toggle, the whole list container after delete. The
//! swap attributes on each element are part of the protocol — the client
//! appends new rows (`beforebegin` on the form), replaces a toggled row in
//! place (`closest div`), and replaces the container after a delete.

use crate::domain::todo::Todo;

pub fn render_item(todo: &Todo) -> String {
    let checked = if todo.completed { " checked" } else { "" };
    format!(
        concat!(
            r#"<div class="todo-item">"#,
            r#"<input type="checkbox"{checked} hx-post="/todos/toggle/{id}" hx-target="closest div" hx-swap="outerHTML">"#,
            r#"<p>{text}</p>"#,
            r##"<button hx-delete="/todos/{id}" hx-target="#todo-list">Delete</button>"##,
            r#"</div>"#
        ),
        checked = checked,
        id = todo.id,
        text = escape(&todo.text),
    )
}

pub fn render_list(todos: &[Todo]) -> String {
    let mut out = String::from(r#"<div id="todo-list">"#);
    for todo in todos {
        out.push_str(&render_item(todo));
    }
    out.push_str(&render_form());
    out.push_str("</div>");
    out
}

pub fn render_form() -> String {
    concat!(
        r#"<form hx-post="/todos" hx-swap="beforebegin">"#,
        r#"<input type="text" name="text" placeholder="Enter a todo">"#,
        r#"<button type="submit">Add To-Do</button>"#,
        r#"</form>"#
    )
    .to_string()
}

pub fn render_error(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape(message))
}

/// Document shell; the list itself is fetched by the client on load.
pub fn page() -> String {
    concat!(
        "<!DOCTYPE html>",
        r#"<html lang="en">"#,
        r#"<head><meta charset="UTF-8">"#,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
        r#"<title>fuda</title>"#,
        r#"<script src="https://unpkg.com/htmx.org@1.9.12"></script>"#,
        r#"</head>"#,
        r#"<body><h1>TO-DO</h1>"#,
        r#"<div hx-get="/todos" hx-trigger="load" hx-swap="innerHTML"></div>"#,
        r#"</body></html>"#
    )
    .to_string()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_carries_routes_for_its_id() {
        let html = render_item(&Todo::new(7, "water plants"));
        assert!(html.contains(r#"hx-post="/todos/toggle/7""#));
        assert!(html.contains(r#"hx-delete="/todos/7""#));
        assert!(html.contains("water plants"));
    }

    #[test]
    fn item_reflects_completion_flag() {
        let fresh = render_item(&Todo::new(1, "x"));
        assert!(!fresh.contains(" checked"));

        let done = Todo {
            completed: true,
            ..Todo::new(1, "x")
        };
        assert!(render_item(&done).contains(" checked"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render_item(&Todo::new(1, r#"<b>&"milk"</b>"#));
        assert!(html.contains("&lt;b&gt;&amp;&quot;milk&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn list_wraps_rows_in_order_and_ends_with_form() {
        let todos = [Todo::new(1, "first"), Todo::new(2, "second")];
        let html = render_list(&todos);
        assert!(html.starts_with(r#"<div id="todo-list">"#));
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        let form = html.find("<form").unwrap();
        assert!(first < second && second < form);
    }

    #[test]
    fn empty_list_still_offers_the_form() {
        let html = render_list(&[]);
        assert!(html.contains(r#"hx-post="/todos""#));
        assert!(html.contains(r#"name="text""#));
    }

    #[test]
    fn error_fragment_is_plain_text() {
        assert_eq!(
            render_error("Text is required"),
            r#"<div class="error">Text is required</div>"#
        );
    }
}
