//! Chart Document Renderer
//!
//! Turns a [`ChartSpec`] and a [`Theme`] into a standalone HTML document
//! that loads vega-embed from a CDN and draws the chart into `#vis`. The
//! result is meant for an iframe `srcdoc`.

use serde::Serialize;
use thiserror::Error;

use crate::chart::{ChartSpec, Theme, ThemeConfig};

pub const VEGA_CDN: &str = "https://cdn.jsdelivr.net/npm/vega@5";
pub const VEGA_LITE_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
pub const VEGA_EMBED_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

/// Id of the element the chart is mounted into
pub const OUTPUT_DIV: &str = "vis";

/// Renderer errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Specification could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Spec fields followed by the theme as `config`
#[derive(Serialize)]
struct Themed<'a> {
    #[serde(flatten)]
    spec: &'a ChartSpec,
    #[serde(skip_serializing_if = "is_empty_config")]
    config: &'a ThemeConfig,
}

fn is_empty_config(config: &&ThemeConfig) -> bool {
    **config == ThemeConfig::default()
}

/// Vega-Lite JSON for `spec` styled by `theme`
pub fn to_vega_lite(spec: &ChartSpec, theme: &Theme) -> RenderResult<String> {
    let themed = Themed {
        spec,
        config: &theme.config,
    };
    Ok(serde_json::to_string(&themed)?)
}

/// Render a chart into a self-contained HTML document.
///
/// Output depends only on the inputs.
pub fn render(spec: &ChartSpec, theme: &Theme) -> RenderResult<String> {
    let json = escape_script(&to_vega_lite(spec, theme)?);

    Ok(format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    .error {{
        color: red;
    }}
  </style>
  <script type="text/javascript" src="{vega}"></script>
  <script type="text/javascript" src="{vega_lite}"></script>
  <script type="text/javascript" src="{vega_embed}"></script>
</head>
<body>
  <div id="{div}"></div>
  <script>
    (function(vegaEmbed) {{
      var spec = {json};
      var embedOpt = {{"mode": "vega-lite"}};

      function showError(el, error) {{
          el.innerHTML = ('<div class="error" style="color:red;">'
                          + '<p>JavaScript Error: ' + error.message + '</p>'
                          + "<p>This usually means there's a typo in your chart specification. "
                          + "See the javascript console for the full traceback.</p>"
                          + '</div>');
          throw error;
      }}
      const el = document.getElementById('{div}');
      vegaEmbed("#{div}", spec, embedOpt)
        .catch(error => showError(el, error));
    }})(vegaEmbed);
  </script>
</body>
</html>
"##,
        vega = VEGA_CDN,
        vega_lite = VEGA_LITE_CDN,
        vega_embed = VEGA_EMBED_CDN,
        div = OUTPUT_DIV,
        json = json,
    ))
}

/// Keep embedded JSON from closing the surrounding `<script>` element
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build_chart, ChartBuilder, ThemeRegistry, MDS_SPECIAL};
    use crate::dataset::Column;
    use serde_json::Value;

    fn extract_spec(html: &str) -> Value {
        let start = html.find("var spec = ").unwrap() + "var spec = ".len();
        let end = start + html[start..].find(";\n").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_render_is_deterministic() {
        let themes = ThemeRegistry::dashboard();
        let a = render(&build_chart("Displacement", "Cylinders").unwrap(), themes.active()).unwrap();
        let b = render(&build_chart("Displacement", "Cylinders").unwrap(), themes.active()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_default_chart() {
        let themes = ThemeRegistry::dashboard();
        let spec = build_chart("Displacement", "Cylinders").unwrap();
        let html = render(&spec, themes.active()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(VEGA_EMBED_CDN));
        assert!(html.contains("<div id=\"vis\"></div>"));

        let embedded = extract_spec(&html);
        assert_eq!(embedded["title"], "Horsepower vs. Displacement");
        assert_eq!(embedded["encoding"]["x"]["field"], "Displacement");
        assert_eq!(embedded["encoding"]["y"]["field"], "Cylinders");
        assert_eq!(embedded["config"]["title"]["font"], "Arial");
    }

    #[test]
    fn test_default_theme_omits_config() {
        let spec = build_chart("Cylinders", "Displacement").unwrap();
        let json: Value =
            serde_json::from_str(&to_vega_lite(&spec, &Theme::none()).unwrap()).unwrap();

        assert!(json.get("config").is_none());
        assert_eq!(json["encoding"]["x"]["field"], "Cylinders");
    }

    #[test]
    fn test_theme_reregistration_keeps_output() {
        let spec = build_chart("Miles_per_Gallon", "Cylinders").unwrap();
        let mut themes = ThemeRegistry::dashboard();
        let before = render(&spec, themes.active()).unwrap();

        for _ in 0..3 {
            themes.register(Theme::mds_special());
            themes.enable(MDS_SPECIAL).unwrap();
        }

        assert_eq!(render(&spec, themes.active()).unwrap(), before);
    }

    #[test]
    fn test_script_close_is_escaped() {
        let spec = ChartBuilder::new(Column::Cylinders, Column::Displacement)
            .title("</script><script>alert(1)</script>")
            .build();
        let html = render(&spec, &Theme::none()).unwrap();

        assert!(!html.contains("</script><script>alert(1)"));
        assert_eq!(
            extract_spec(&html)["title"],
            "</script><script>alert(1)</script>"
        );
    }
}
