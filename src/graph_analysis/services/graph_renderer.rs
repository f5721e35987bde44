//! DOT rendering of the aggregated indexes.
//!
//! The renderer is a small state machine: `start` opens a graph (and may be
//! called again to begin a fresh one), nodes and edges may only be written
//! while a graph is open, and `end` closes it and hands back the text.

use crate::graph_analysis::domain::{ArtifactKey, DependencyIndex, GroupIndex, NodeId, NodeIdAllocator};
use crate::graph_analysis::policies::{
    ColourPalette, FixedImportance, Importance, ImportancePolicy, NamespaceRestriction,
};
use crate::shared::error::PomGraphError;
use crate::shared::Result;
use std::collections::HashMap;
use std::fmt::{self, Write};

const GRAPH_HEADER: &str = "digraph G {";
const GRAPH_FOOTER: &str = "}";

/// Canvas size written into the graph's `size` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1000, 1000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    NotStarted,
    InProgress,
    Ended,
}

impl RenderState {
    fn describe(self) -> &'static str {
        match self {
            RenderState::NotStarted => "not started",
            RenderState::InProgress => "in progress",
            RenderState::Ended => "ended",
        }
    }
}

/// Why an edge was left out of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingReferrerNode,
    MissingDependencyNode,
    MissingBothNodes,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingReferrerNode => write!(f, "referrer has no node"),
            SkipReason::MissingDependencyNode => write!(f, "dependency has no node"),
            SkipReason::MissingBothNodes => write!(f, "neither end has a node"),
        }
    }
}

/// A "broken" edge: at least one endpoint was never declared as a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEdge {
    pub referrer: ArtifactKey,
    pub dependency: ArtifactKey,
    pub version: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}): {}",
            self.referrer, self.dependency, self.version, self.reason
        )
    }
}

/// Finished graph text plus the edges that could not be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGraph {
    pub dot: String,
    pub skipped_edges: Vec<SkippedEdge>,
    pub node_count: usize,
    pub edge_count: usize,
}

/// GraphRenderer - writes Graphviz DOT for a group index and dependency index
///
/// All per-render state (colour cursor, node ids, cluster counter) lives on
/// the renderer and is reset by [`GraphRenderer::start`].
pub struct GraphRenderer<P: ImportancePolicy = FixedImportance> {
    state: RenderState,
    output: String,
    palette: ColourPalette,
    nodes: NodeIdAllocator,
    group_colours: HashMap<String, &'static str>,
    cluster_counter: usize,
    edge_counter: usize,
    skipped_edges: Vec<SkippedEdge>,
    importance_policy: P,
}

impl GraphRenderer<FixedImportance> {
    pub fn new() -> Self {
        Self::with_importance_policy(FixedImportance::default())
    }
}

impl Default for GraphRenderer<FixedImportance> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ImportancePolicy> GraphRenderer<P> {
    pub fn with_importance_policy(importance_policy: P) -> Self {
        Self {
            state: RenderState::NotStarted,
            output: String::new(),
            palette: ColourPalette::new(),
            nodes: NodeIdAllocator::new(),
            group_colours: HashMap::new(),
            cluster_counter: 0,
            edge_counter: 0,
            skipped_edges: Vec::new(),
            importance_policy,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Renders both indexes as one complete graph.
    ///
    /// Edges are written only when the referrer or the dependency coordinate
    /// starts with `restriction`.
    pub fn render(
        &mut self,
        group_index: &GroupIndex,
        dependency_index: &DependencyIndex,
        restriction: &NamespaceRestriction,
        canvas: CanvasSize,
        cluster: bool,
    ) -> Result<RenderedGraph> {
        self.start(canvas);
        self.write_nodes(cluster, group_index)?;

        for (dependency, version, referrer) in dependency_index.edges() {
            if !restriction.admits_coordinate(referrer) && !restriction.admits_coordinate(dependency)
            {
                continue;
            }
            let importance = self.importance_policy.importance(dependency, version);
            self.link_nodes(dependency, version, referrer, importance)?;
        }

        self.end()
    }

    /// Opens a new graph, discarding anything from a previous render
    pub fn start(&mut self, canvas: CanvasSize) {
        self.output.clear();
        self.palette.reset();
        self.nodes.reset();
        self.group_colours.clear();
        self.cluster_counter = 0;
        self.edge_counter = 0;
        self.skipped_edges.clear();

        self.output.push_str(GRAPH_HEADER);
        self.output.push('\n');
        self.output.push_str(&format!(
            "    size=\"{},{}\";\n",
            canvas.width, canvas.height
        ));

        self.state = RenderState::InProgress;
    }

    /// Declares every artifact of `group_index` as a node, one colour per group
    pub fn write_nodes(&mut self, cluster: bool, group_index: &GroupIndex) -> Result<()> {
        self.require_in_progress("write nodes")?;

        for (group_id, artifact_ids) in group_index.iter() {
            let colour = self.palette.next();
            self.group_colours.insert(group_id.to_string(), colour);

            if cluster {
                writeln!(self.output, "    subgraph cluster_{} {{", self.cluster_counter)?;
                self.cluster_counter += 1;
                writeln!(self.output, "        label=\"{}\";", escape_label(group_id))?;
                writeln!(self.output, "        color={};", colour)?;
                self.output.push_str("        style=dashed;\n");
            }

            for artifact_id in artifact_ids {
                let key = ArtifactKey::new(group_id, artifact_id.as_str());
                let node_id = self.nodes.id_for(&key).clone();
                writeln!(
                    self.output,
                    "        {} [label=\"{}\", shape=box];",
                    node_id,
                    escape_label(artifact_id)
                )?;
            }

            if cluster {
                self.output.push_str("    }\n");
            }
        }

        Ok(())
    }

    /// Draws `referrer -> dependency` in the referrer's group colour.
    ///
    /// Returns `false` and records a [`SkippedEdge`] when either endpoint was
    /// never declared as a node.
    pub fn link_nodes(
        &mut self,
        dependency: &ArtifactKey,
        version: &str,
        referrer: &ArtifactKey,
        importance: Importance,
    ) -> Result<bool> {
        self.require_in_progress("link nodes")?;

        let from = self.nodes.get(referrer).cloned();
        let to = self.nodes.get(dependency).cloned();
        let colour = self.group_colours.get(referrer.group_id()).copied();

        let (from, to, colour) = match (from, to, colour) {
            (Some(from), Some(to), Some(colour)) => (from, to, colour),
            (from, to, _) => {
                let reason = match (from.is_some(), to.is_some()) {
                    (false, false) => SkipReason::MissingBothNodes,
                    (true, false) => SkipReason::MissingDependencyNode,
                    // Referrer id without a group colour counts as an undrawn referrer
                    _ => SkipReason::MissingReferrerNode,
                };
                self.skipped_edges.push(SkippedEdge {
                    referrer: referrer.clone(),
                    dependency: dependency.clone(),
                    version: version.to_string(),
                    reason,
                });
                return Ok(false);
            }
        };

        self.write_edge(&from, &to, colour, importance);
        Ok(true)
    }

    fn write_edge(&mut self, from: &NodeId, to: &NodeId, colour: &str, importance: Importance) {
        self.output.push_str(&format!(
            "    {} -> {} [color={},penwidth={}];\n",
            from, to, colour, importance
        ));
        self.edge_counter += 1;
    }

    /// Closes the graph and returns its text
    pub fn end(&mut self) -> Result<RenderedGraph> {
        self.require_in_progress("end")?;

        self.output.push_str(GRAPH_FOOTER);
        self.output.push('\n');
        self.output.push('\n');
        self.state = RenderState::Ended;

        Ok(RenderedGraph {
            dot: std::mem::take(&mut self.output),
            skipped_edges: std::mem::take(&mut self.skipped_edges),
            node_count: self.nodes.len(),
            edge_count: self.edge_counter,
        })
    }

    fn require_in_progress(&self, operation: &'static str) -> Result<()> {
        if self.state != RenderState::InProgress {
            return Err(PomGraphError::RenderState {
                operation,
                state: self.state.describe(),
            }
            .into());
        }
        Ok(())
    }
}

/// Escape special characters for DOT labels.
fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
