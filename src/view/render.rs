//! HTML rendering of the list view (table, pagination footer, side panel).

use crate::view::{EditPanel, ListView, Phase};
use chrono::{DateTime, Utc};
use handlebars::{Handlebars, RenderError};
use serde_json::{json, Value};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Countries</title></head>
<body>
{{#if loading}}<div class="status">Loading...</div>{{/if}}
{{#if error}}<div class="status error">Error: {{error}}</div>{{/if}}
{{#if ready}}
<main>
  <header>
    <h1>Countries</h1>
    <p>Managing {{total}} countries</p>
  </header>
  <div class="actions">
    <button type="button" data-action="create">Add country</button>
    <button type="button" data-action="delete-selected"{{#unless selected_count}} disabled{{/unless}}>Delete selected ({{selected_count}})</button>
  </div>
  <table>
    <thead>
      <tr>
        <th><input type="checkbox" data-action="select-all"{{#if all_checked}} checked{{/if}}></th>
        <th>ID</th><th>Country</th><th>Last update</th><th>Actions</th>
      </tr>
    </thead>
    <tbody>
{{#each rows}}
      <tr data-id="{{id}}">
        <td><input type="checkbox" data-action="toggle" value="{{id}}"{{#if checked}} checked{{/if}}></td>
        <td>{{id}}</td>
        <td>{{name}}</td>
        <td>{{last_update}}</td>
        <td><button type="button" data-action="edit" value="{{id}}">Edit</button></td>
      </tr>
{{/each}}
    </tbody>
  </table>
  <nav class="pagination">
    <span>{{label}}</span>
    <a href="?page={{prev_page}}"{{#unless has_previous}} aria-disabled="true"{{/unless}}>Previous</a>
    <span>{{page}} / {{total_pages}}</span>
    <a href="?page={{next_page}}"{{#unless has_next}} aria-disabled="true"{{/unless}}>Next</a>
  </nav>
</main>
{{#if panel}}
<aside class="side-panel">
  <h2>Edit Country</h2>
  {{#if panel.bound}}
  <form data-country-id="{{panel.id}}">
    <label>Country Name: <input type="text" name="country" value="{{panel.draft}}"></label>
    <button type="submit" data-action="save">Save</button>
    <button type="button" data-action="close">Close</button>
  </form>
  {{else}}
  <p>No country selected</p>
  {{/if}}
</aside>
{{/if}}
{{/if}}
</body>
</html>
"#;

/// `YYYY. MM. DD. HH:MM` in UTC, 24-hour clock.
pub fn format_last_update(ts: &DateTime<Utc>) -> String {
    ts.format("%Y. %m. %d. %H:%M").to_string()
}

fn panel_context(panel: Option<EditPanel>) -> Value {
    match panel {
        Some(EditPanel::Bound { country, draft }) => json!({
            "bound": true,
            "id": country.country_id,
            "draft": draft,
        }),
        Some(EditPanel::Empty) => json!({ "bound": false }),
        None => Value::Null,
    }
}

fn page_context(view: &ListView) -> Value {
    match view.phase() {
        Phase::Loading => json!({ "loading": true }),
        Phase::Failed(message) => json!({ "error": message }),
        Phase::Ready => {
            let window = view.window();
            let rows: Vec<Value> = view
                .visible()
                .iter()
                .map(|c| {
                    json!({
                        "id": c.country_id,
                        "name": c.country,
                        "last_update": format_last_update(&c.last_update),
                        "checked": view.selected().contains(&c.country_id),
                    })
                })
                .collect();
            json!({
                "ready": true,
                "total": window.total,
                "selected_count": view.selected().len(),
                "all_checked": view.select_all_checked(),
                "rows": rows,
                "label": window.label(),
                "page": window.page,
                "total_pages": window.total_pages,
                "has_previous": window.has_previous(),
                "has_next": window.has_next(),
                "prev_page": window.page.saturating_sub(1).max(1),
                "next_page": (window.page + 1).min(window.total_pages.max(1)),
                "panel": panel_context(view.edit_panel()),
            })
        }
    }
}

pub fn render_page(view: &ListView) -> Result<String, RenderError> {
    Handlebars::new().render_template(PAGE_TEMPLATE, &page_context(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;
    use chrono::TimeZone;

    fn view_with(names: &[&str]) -> ListView {
        let ts = Utc.with_ymd_and_hms(2006, 2, 15, 9, 44, 0).unwrap();
        let rows = names
            .iter()
            .enumerate()
            .map(|(i, n)| Country {
                country_id: i as i32 + 1,
                country: n.to_string(),
                last_update: ts,
            })
            .collect();
        let mut view = ListView::new();
        view.settle(Ok(rows));
        view
    }

    #[test]
    fn timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2006, 2, 15, 9, 4, 0).unwrap();
        assert_eq!(format_last_update(&ts), "2006. 02. 15. 09:04");
    }

    #[test]
    fn loading_and_error_replace_the_page() {
        let loading = render_page(&ListView::new()).unwrap();
        assert!(loading.contains("Loading..."));
        assert!(!loading.contains("<table>"));

        let mut failed = ListView::new();
        failed.settle(Err("connection refused".into()));
        let html = render_page(&failed).unwrap();
        assert!(html.contains("Error: connection refused"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn ready_page_lists_rows_and_escapes_names() {
        let mut view = view_with(&["Afghanistan", "<Bad & Co>"]);
        view.toggle(2);
        let html = render_page(&view).unwrap();
        assert!(html.contains("Managing 2 countries"));
        assert!(html.contains("Afghanistan"));
        assert!(html.contains("&lt;Bad &amp; Co&gt;"));
        assert!(html.contains("2006. 02. 15. 09:44"));
        assert!(html.contains("Delete selected (1)"));
        assert!(html.contains("1-2 / 2"));
        assert!(!html.contains("side-panel"));
    }

    #[test]
    fn open_panel_renders_form_or_placeholder() {
        let mut view = view_with(&["Chile"]);
        let chile = view.countries()[0].clone();
        view.open_edit(&chile);
        let html = render_page(&view).unwrap();
        assert!(html.contains("Edit Country"));
        assert!(html.contains(r#"value="Chile""#));

        view.open_create();
        let html = render_page(&view).unwrap();
        assert!(html.contains("No country selected"));
    }
}
