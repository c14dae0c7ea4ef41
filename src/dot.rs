//! Graphviz rendering of the task graph.

use crate::edges::EdgeSet;
use crate::node::{NodeStore, State};
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Bucket names rendered as display clusters, in output order.
pub const CLUSTER_BUCKETS: [&str; 4] = ["source", "dest", "target", "cur"];

/// Fill and label colors for a node state.
fn state_colors(state: State) -> (&'static str, &'static str) {
    match state {
        State::New => ("deeppink", "black"),
        State::Todo => ("grey95", "black"),
        State::Done => ("#CCFFCC", "#99CC99"),
        State::Dropped => ("#FFDDDD", "#FF9999"),
        State::Waiting => ("red", "black"),
        State::Someday => ("#DDAAFF", "#99AA99"),
        State::Persist => ("green", "black"),
        State::Unknown => ("grey95", "grey50"),
    }
}

/// Quote a value for dot output, escaping embedded quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Format an attribute list: `[k="v", k="v"]`.
fn attrs(pairs: &[(&str, &str)]) -> String {
    let body = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, quote(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

/// Renders a styled directed-graph description from a node-id stream.
///
/// Node statements are emitted once per input occurrence (the input stream is
/// taken as-is); the membership set used to admit edges is deduplicated.
/// Edges are drawn only where both endpoints were rendered. Buckets become
/// softly-colored clusters regardless of the edge/node model.
pub struct GraphRenderer<'a> {
    nodes: &'a mut NodeStore,
    dependencies: EdgeSet,
    contexts: EdgeSet,
    buckets: Vec<(String, Vec<String>)>,
}

impl<'a> GraphRenderer<'a> {
    pub fn new(
        nodes: &'a mut NodeStore,
        dependencies: EdgeSet,
        contexts: EdgeSet,
        buckets: Vec<(String, Vec<String>)>,
    ) -> Self {
        Self {
            nodes,
            dependencies,
            contexts,
            buckets,
        }
    }

    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        ids: impl IntoIterator<Item = String>,
    ) -> io::Result<()> {
        writeln!(out, "digraph {{")?;
        writeln!(out, "rankdir = LR;")?;
        writeln!(out, "fontname = monospace;")?;

        let mut members: BTreeSet<String> = BTreeSet::new();
        for id in ids {
            self.write_node(out, &id)?;
            members.insert(id);
        }

        Self::write_edges(out, &self.dependencies, &members, "solid")?;
        Self::write_edges(out, &self.contexts, &members, "dashed")?;

        for (name, ids) in &self.buckets {
            Self::write_bucket(out, name, ids)?;
        }

        writeln!(out, "}}")
    }

    fn write_node<W: Write>(&mut self, out: &mut W, id: &str) -> io::Result<()> {
        let (fill, label_color) = state_colors(self.nodes.state(id));
        let gloss = self.nodes.gloss(id).to_string();
        let formatted = attrs(&[
            ("label", gloss.as_str()),
            ("style", "filled"),
            ("shape", "box"),
            ("color", fill),
            ("penwidth", "2"),
            ("fillcolor", fill),
            ("fontcolor", label_color),
        ]);
        writeln!(out, "{} {};", quote(id), formatted)
    }

    fn write_edges<W: Write>(
        out: &mut W,
        edges: &EdgeSet,
        members: &BTreeSet<String>,
        style: &str,
    ) -> io::Result<()> {
        for (u, v) in edges.iter() {
            if members.contains(u) && members.contains(v) {
                writeln!(out, "{} -> {} [style={}];", quote(u), quote(v), quote(style))?;
            }
        }
        Ok(())
    }

    fn write_bucket<W: Write>(out: &mut W, name: &str, members: &[String]) -> io::Result<()> {
        writeln!(out, "subgraph {} {{", quote(&format!("cluster_{name}")))?;
        writeln!(out, "label = {};", quote(name))?;
        writeln!(out, "style = rounded;")?;
        writeln!(out, "color = grey90;")?;
        writeln!(out, "bgcolor = grey90;")?;
        writeln!(out, "fontname = \"italic\";")?;
        writeln!(out, "fontsize = \"9pt\"")?;
        for id in members {
            writeln!(out, "{}", quote(id))?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}
