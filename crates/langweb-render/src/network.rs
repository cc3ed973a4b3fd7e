//! The interactive network diagram page.
//!
//! The graph goes through petgraph as an undirected graph before rendering:
//! parallel links collapse to a single edge, and the browser-side
//! vis-network library does the layout.

use petgraph::graph::{NodeIndex, UnGraph};
use serde_json::json;
use tracing::{info, warn};

use langweb_core::types::collections::{FxHashMap, FxHashSet};
use langweb_core::types::NetworkData;

use crate::shell::page;

/// Physics and styling options handed to vis-network. The barnesHut numbers
/// are hand-tuned for a graph of this size; keep them in sync with the
/// published diagram.
const NETWORK_OPTIONS: &str = r##"{
  "nodes": {
    "borderWidth": 3,
    "borderWidthSelected": 80,
    "color": {
      "border": "#2B7CE9",
      "background": "#D2E5FF",
      "highlight": {
        "border": "#2B7CE9",
        "background": "#D2E5FF"
      },
      "hover": {
        "border": "#2B7CE9",
        "background": "#D2E5FF"
      }
    },
    "font": {
      "color": "#343434",
      "size": 40
    },
    "size": 50,
    "scaling": {
      "enabled": false
    }
  },
  "edges": {
    "color": {
      "inherit": "both"
    },
    "smooth": {
      "enabled": true,
      "type": "dynamic"
    },
    "width": 10
  },
  "physics": {
    "enabled": true,
    "barnesHut": {
      "gravitationalConstant": -3000,
      "centralGravity": 0.005,
      "springLength": 500,
      "springConstant": 0.01,
      "damping": 0.8,
      "avoidOverlap": 0.7
    },
    "maxVelocity": 1,
    "minVelocity": 0,
    "solver": "barnesHut",
    "timestep": 0.001,
    "stabilization": {
      "enabled": true,
      "fit": true
    }
  }
}"##;

const VIS_NETWORK_CDN: &str =
    "    <script src=\"https://unpkg.com/vis-network/standalone/umd/vis-network.min.js\"></script>";

/// Render the network page for the given graph.
pub fn network_html(data: &NetworkData) -> String {
    let graph = assemble(data);

    let nodes: Vec<_> = data
        .nodes
        .iter()
        .map(|node| json!({ "id": node.id, "label": node.id, "color": node.color }))
        .collect();
    let edges: Vec<_> = graph
        .edge_indices()
        .filter_map(|edge| graph.edge_endpoints(edge))
        .map(|(a, b)| json!({ "from": graph[a], "to": graph[b] }))
        .collect();

    let mut body = String::new();
    body.push_str("    <div id=\"network\" class=\"network\">\n");
    body.push_str("      <div id=\"langweb-network\" style=\"height: 550px; width: 100%; background-color: #ffffff;\"></div>\n");
    body.push_str("    </div>\n");
    body.push_str("    <script type=\"text/javascript\">\n");
    body.push_str(&format!(
        "      const nodes = new vis.DataSet({});\n",
        serde_json::Value::Array(nodes)
    ));
    body.push_str(&format!(
        "      const edges = new vis.DataSet({});\n",
        serde_json::Value::Array(edges)
    ));
    body.push_str("      const container = document.getElementById(\"langweb-network\");\n");
    body.push_str(&format!(
        "      new vis.Network(container, {{ nodes: nodes, edges: edges }}, {NETWORK_OPTIONS});\n"
    ));
    body.push_str("    </script>\n");

    page(
        "Network | The language use web",
        "Network",
        &[("Home", "index.html")],
        VIS_NETWORK_CDN,
        &body,
    )
}

/// Build the undirected graph: one petgraph node per exchange node, parallel
/// and reversed duplicate links collapsed to a single edge. Links naming an
/// unknown node id are dropped with a warning rather than silently growing
/// the node set.
fn assemble(data: &NetworkData) -> UnGraph<String, ()> {
    let mut graph = UnGraph::<String, ()>::default();
    let mut index: FxHashMap<&str, NodeIndex> = FxHashMap::default();
    for node in &data.nodes {
        index.insert(node.id.as_str(), graph.add_node(node.id.clone()));
    }

    let mut seen: FxHashSet<(NodeIndex, NodeIndex)> = FxHashSet::default();
    let mut dropped = 0usize;
    for link in &data.links {
        let (Some(&a), Some(&b)) = (index.get(link.source.as_str()), index.get(link.target.as_str()))
        else {
            warn!(source = %link.source, target = %link.target, "link endpoint not in node set");
            dropped += 1;
            continue;
        };
        let pair = if a <= b { (a, b) } else { (b, a) };
        if seen.insert(pair) {
            graph.add_edge(a, b, ());
        }
    }

    let isolated = graph
        .node_indices()
        .filter(|&n| graph.neighbors(n).next().is_none())
        .count();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        isolated,
        dropped,
        "assembled network graph"
    );
    graph
}
