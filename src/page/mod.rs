//! Dashboard Page
//!
//! The static page shell and the update handler behind its dropdowns.
//!
//! ```text
//! GET /          → render_page(update_plot(DEFAULT_X, DEFAULT_Y))
//! change(x | y)  → POST /_update {x, y} → update_plot(x, y) → iframe.srcdoc
//! ```
//!
//! The page keeps the dropdown values; the server sees both on every update
//! and holds nothing between requests.

use thiserror::Error;

use crate::chart::{build_chart, ChartError, Theme, DEFAULT_X, DEFAULT_Y};
use crate::dataset::Column;
use crate::render::{render, RenderError};

pub const PAGE_TITLE: &str = "Dashboard with pure Vega-Lite HTML";
pub const HEADING: &str = "Building a dashboard is fast!";
pub const IMAGE_URL: &str =
    "https://kt-media-knowtechie.netdna-ssl.com/wp-content/uploads/2019/04/sonic-the-hedgehog.jpg";

/// Element ids shared by the markup and the client script
pub const PLOT_ID: &str = "plot";
pub const X_DROPDOWN_ID: &str = "dd-chart";
pub const Y_DROPDOWN_ID: &str = "dd-chart-y";
pub const OUTPUT_ID: &str = "dd-output";

/// Path of the update channel
pub const UPDATE_PATH: &str = "/_update";

/// Errors from producing a chart document
#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for page operations
pub type PageResult<T> = Result<T, PageError>;

/// Rebuild the chart for a pair of dropdown values.
///
/// Synchronous and stateless: the returned document replaces the frame's
/// previous content entirely.
pub fn update_plot(x: &str, y: &str, theme: &Theme) -> PageResult<String> {
    let spec = build_chart(x, y)?;
    Ok(render(&spec, theme)?)
}

/// Chart document shown before any dropdown changes
pub fn initial_plot(theme: &Theme) -> PageResult<String> {
    update_plot(DEFAULT_X.name(), DEFAULT_Y.name(), theme)
}

/// Full page HTML with `srcdoc` loaded into the plot frame
pub fn render_page(srcdoc: &str) -> String {
    let x_dropdown = dropdown(X_DROPDOWN_ID, DEFAULT_X);
    let y_dropdown = dropdown(Y_DROPDOWN_ID, DEFAULT_Y);

    format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <div>
    <h1>{heading}</h1>
    <img src="{image}" height="300">
    <h2>Here is a plot: </h2>
    <iframe sandbox="allow-scripts" id="{plot}" height="500" width="600" style="border-width: 5px;" srcdoc="{srcdoc}"></iframe>
    <div class="markdown"><p><code>print('Hello World')</code></p></div>
    <div id="{output}"></div>
    <iframe height="50" width="10" style="border-width: 0;"></iframe>
    <h3>Dropdown to control the chart</h3>
    {x_dropdown}
    {y_dropdown}
    <iframe height="200" width="10" style="border-width: 0;"></iframe>
  </div>
  <script>
{script}
  </script>
</body>
</html>
"##,
        title = escape_html(PAGE_TITLE),
        heading = escape_html(HEADING),
        image = escape_html(IMAGE_URL),
        plot = PLOT_ID,
        srcdoc = escape_html(srcdoc),
        output = OUTPUT_ID,
        x_dropdown = x_dropdown,
        y_dropdown = y_dropdown,
        script = client_script(),
    )
}

/// `<select>` listing every selectable column with `selected` preselected
fn dropdown(id: &str, selected: Column) -> String {
    let options: String = Column::ALL
        .iter()
        .map(|c| {
            let marker = if *c == selected { " selected" } else { "" };
            format!(
                r#"<option value="{name}"{marker}>{name}</option>"#,
                name = escape_html(c.name()),
                marker = marker
            )
        })
        .collect();

    format!(
        r#"<select id="{id}" style="width: 45%; vertical-align: middle;">{options}</select>"#,
        id = id,
        options = options
    )
}

/// Posts both dropdown values on every change and swaps the frame document.
///
/// Responses are applied only if no newer request has been sent since, so a
/// slow earlier reply cannot overwrite the chart for the current selection.
fn client_script() -> String {
    format!(
        r#"    (function() {{
      const plot = document.getElementById('{plot}');
      const output = document.getElementById('{output}');
      const xSelect = document.getElementById('{x}');
      const ySelect = document.getElementById('{y}');
      let latest = 0;

      function update() {{
        const seq = ++latest;
        fetch('{path}', {{
          method: 'POST',
          headers: {{ 'Content-Type': 'application/json' }},
          body: JSON.stringify({{ x: xSelect.value, y: ySelect.value }})
        }})
          .then(response => response.json().then(body => ({{ ok: response.ok, body: body }})))
          .then(result => {{
            if (seq !== latest) {{
              return;
            }}
            if (result.ok) {{
              output.textContent = '';
              plot.srcdoc = result.body.srcdoc;
            }} else {{
              output.textContent = result.body.error.message;
            }}
          }})
          .catch(err => {{
            if (seq === latest) {{
              output.textContent = String(err);
            }}
          }});
      }}

      xSelect.addEventListener('change', update);
      ySelect.addEventListener('change', update);
    }})();"#,
        plot = PLOT_ID,
        output = OUTPUT_ID,
        x = X_DROPDOWN_ID,
        y = Y_DROPDOWN_ID,
        path = UPDATE_PATH,
    )
}

/// Escape text for HTML content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Axis, ThemeRegistry};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_initial_plot_uses_defaults() {
        let themes = ThemeRegistry::dashboard();
        let doc = initial_plot(themes.active()).unwrap();

        assert!(doc.contains("Horsepower vs. Displacement"));
        assert!(doc.contains(r#""x":{"field":"Displacement""#));
        assert!(doc.contains(r#""y":{"field":"Cylinders""#));
    }

    #[test]
    fn test_update_plot_replaces_document() {
        let themes = ThemeRegistry::dashboard();
        let before = initial_plot(themes.active()).unwrap();
        let after = update_plot("Miles_per_Gallon", "Displacement", themes.active()).unwrap();

        assert_ne!(before, after);
        assert!(after.contains(r#""x":{"field":"Miles_per_Gallon""#));
        assert!(after.contains(r#""y":{"field":"Displacement""#));
        assert!(!after.contains("Cylinders"));
    }

    #[test]
    fn test_update_plot_unknown_column() {
        let themes = ThemeRegistry::dashboard();
        let err = update_plot("Displacement", "Weight", themes.active()).unwrap_err();

        match err {
            PageError::Chart(ChartError::UnknownColumn { axis, name }) => {
                assert_eq!(axis, Axis::Y);
                assert_eq!(name, "Weight");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_page_layout() {
        let page = render_page("<p>chart</p>");

        assert!(page.contains("<h1>Building a dashboard is fast!</h1>"));
        assert!(page.contains(IMAGE_URL));
        assert!(page.contains(r#"srcdoc="&lt;p&gt;chart&lt;/p&gt;""#));
        assert!(page.contains(r#"id="dd-chart""#));
        assert!(page.contains(r#"id="dd-chart-y""#));
        assert!(page.contains(r#"<option value="Displacement" selected>Displacement</option>"#));
        assert!(page.contains(r#"<option value="Cylinders" selected>Cylinders</option>"#));
        assert!(page.contains("fetch('/_update'"));
    }

    #[test]
    fn test_client_script_drops_stale_responses() {
        let script = client_script();

        assert!(script.contains("const seq = ++latest;"));
        let guard = script.find("if (seq !== latest)").unwrap();
        let swap = script.find("plot.srcdoc = result.body.srcdoc").unwrap();
        assert!(guard < swap);
        assert!(script.contains("addEventListener('change', update)"));
    }

    #[test]
    fn test_dropdown_lists_all_columns_in_order() {
        let html = dropdown("dd", Column::MilesPerGallon);
        let mpg = html.find("Miles_per_Gallon").unwrap();
        let cyl = html.find("Cylinders").unwrap();
        let disp = html.find("Displacement").unwrap();

        assert!(mpg < cyl && cyl < disp);
        assert_eq!(html.matches(" selected").count(), 1);
    }
}
