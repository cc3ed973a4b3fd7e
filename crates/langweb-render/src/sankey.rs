//! The Sankey diagram page: one Plotly figure per survey category.

use serde_json::json;
use tracing::info;

use langweb_core::types::collections::FxHashMap;
use langweb_core::types::SankeyData;

use crate::palette;
use crate::shell::page;

/// One diagram on the page: title, anchor id, and its flows.
#[derive(Debug, Clone)]
pub struct SankeyDiagram {
    pub title: String,
    pub anchor: String,
    pub data: SankeyData,
}

impl SankeyDiagram {
    pub fn new(title: impl Into<String>, anchor: impl Into<String>, data: SankeyData) -> Self {
        Self {
            title: title.into(),
            anchor: anchor.into(),
            data,
        }
    }
}

/// Render the full Sankey page.
pub fn sankey_html(diagrams: &[SankeyDiagram]) -> String {
    let mut nav: Vec<(&str, &str)> = vec![("Home", "index.html")];
    let anchors: Vec<String> = diagrams.iter().map(|d| format!("#{}", d.anchor)).collect();
    for (diagram, anchor) in diagrams.iter().zip(&anchors) {
        nav.push((diagram.title.as_str(), anchor.as_str()));
    }

    let mut body = String::new();
    for diagram in diagrams {
        body.push_str(&render_diagram(diagram));
    }

    info!(diagrams = diagrams.len(), "rendered sankey page");
    page(
        "Sankey Diagram | The language use web",
        "Sankey Diagram",
        &nav,
        "",
        &body,
    )
}

fn render_diagram(diagram: &SankeyDiagram) -> String {
    let fig = figure(diagram);
    let plot_id = format!("plot-{}", diagram.anchor);

    let mut out = String::new();
    out.push_str(&format!(
        "    <div id=\"{}\" class=\"diagram\">\n",
        diagram.anchor
    ));
    out.push_str(&format!("      <div id=\"{plot_id}\"></div>\n"));
    out.push_str("      <script type=\"text/javascript\">\n");
    out.push_str(&format!("        const fig_{} = {fig};\n", sanitize(&diagram.anchor)));
    out.push_str(&format!(
        "        Plotly.newPlot(\"{plot_id}\", fig_{0}.data, fig_{0}.layout);\n",
        sanitize(&diagram.anchor)
    ));
    out.push_str("      </script>\n");
    out.push_str("    </div>\n");
    out
}

/// Build the Plotly figure spec for one diagram. Labels are numbered in
/// first-appearance order and the parallel link arrays reference them by
/// index, which is what the Sankey trace expects.
fn figure(diagram: &SankeyDiagram) -> serde_json::Value {
    let data = &diagram.data;
    let labels = data.labels();
    let index: FxHashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();

    let source_indices: Vec<usize> = data.source.iter().map(|s| index[s.as_str()]).collect();
    let target_indices: Vec<usize> = data.target.iter().map(|t| index[t.as_str()]).collect();
    let node_colors: Vec<String> = labels.iter().map(|l| palette::node_color(l)).collect();
    let link_colors: Vec<String> = data.source.iter().map(|s| palette::link_color(s)).collect();

    json!({
        "data": [{
            "type": "sankey",
            "node": {
                "pad": 25,
                "thickness": 20,
                "line": { "color": "black", "width": 0.5 },
                "label": labels,
                "color": node_colors
            },
            "link": {
                "source": source_indices,
                "target": target_indices,
                "value": data.value,
                "color": link_colors
            }
        }],
        "layout": {
            "title": { "text": diagram.title },
            "font": { "size": 15 },
            "width": 1250,
            "height": 1000
        }
    })
}

/// Anchor ids become JavaScript identifiers; keep only safe characters.
fn sanitize(anchor: &str) -> String {
    anchor
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
