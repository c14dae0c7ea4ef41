//! Integration tests for the graph visualization exporter.

mod common;

use common::TestEnv;
use lattice::{CLUSTER_BUCKETS, GraphRenderer, bucket_members};

fn render(env: &TestEnv, ids: &[&str]) -> String {
    let dependencies = env.load_edges("dependencies");
    let contexts = env.load_edges("contexts");
    let buckets = CLUSTER_BUCKETS
        .iter()
        .map(|name| {
            (
                name.to_string(),
                bucket_members(&env.bucket_dir(), name).expect("Failed to list bucket"),
            )
        })
        .collect();

    let mut store = env.node_store();
    let mut renderer = GraphRenderer::new(&mut store, dependencies, contexts, buckets);

    let mut out = Vec::new();
    renderer
        .render(&mut out, ids.iter().map(|id| id.to_string()))
        .expect("Failed to render");
    String::from_utf8(out).expect("Render output is not UTF-8")
}

// =============================================================================
// Node Statements
// =============================================================================

#[test]
fn test_repeated_input_ids_repeat_node_statements() {
    let env = TestEnv::new();
    env.add_node("a", "Task a", "TODO");
    env.add_node("b", "Task b", "TODO");

    let output = render(&env, &["a", "a", "b"]);

    let a_count = output.lines().filter(|line| line.starts_with("\"a\" [")).count();
    let b_count = output.lines().filter(|line| line.starts_with("\"b\" [")).count();
    assert_eq!(a_count, 2);
    assert_eq!(b_count, 1);
}

#[test]
fn test_gloss_is_first_contents_line() {
    let env = TestEnv::new();
    env.add_node("a", "Fix the gate\nThe hinge is rusted through", "TODO");

    let output = render(&env, &["a"]);
    assert!(output.contains("label=\"Fix the gate\""));
    assert!(!output.contains("hinge"));
}

#[test]
fn test_node_without_attributes_renders_placeholder() {
    let env = TestEnv::new();
    env.add_bare_node("ghost");

    let output = render(&env, &["ghost"]);
    assert!(output.contains("label=\"[no contents]\""));
    // Unknown state falls back to the neutral pair
    assert!(output.contains("fillcolor=\"grey95\""));
    assert!(output.contains("fontcolor=\"grey50\""));
}

#[test]
fn test_states_pick_their_colors() {
    let env = TestEnv::new();
    env.add_node("fresh", "Fresh task", "NEW");
    env.add_node("finished", "Finished task", "DONE");

    let output = render(&env, &["fresh", "finished"]);
    assert!(output.contains("fillcolor=\"deeppink\""));
    assert!(output.contains("fillcolor=\"#CCFFCC\""));
}

#[test]
fn test_quotes_in_gloss_are_escaped() {
    let env = TestEnv::new();
    env.add_node("q", "Call \"the guy\"", "TODO");

    let output = render(&env, &["q"]);
    assert!(output.contains("label=\"Call \\\"the guy\\\"\""));
}

// =============================================================================
// Edge Statements
// =============================================================================

#[test]
fn test_edges_between_rendered_nodes_only() {
    let env = TestEnv::new();
    env.add_node("a", "Task a", "TODO");
    env.add_node("b", "Task b", "TODO");
    env.add_edge("dependencies", "a", "b");
    env.add_edge("dependencies", "a", "c");

    let output = render(&env, &["a", "b"]);

    assert!(output.contains("\"a\" -> \"b\" [style=\"solid\"];"));
    // 'c' was not rendered, so the edge touching it is suppressed
    assert!(!output.contains("\"a\" -> \"c\""));
}

#[test]
fn test_dependency_edges_solid_context_edges_dashed() {
    let env = TestEnv::new();
    env.add_node("a", "Task a", "TODO");
    env.add_node("b", "Task b", "TODO");
    env.add_node("home", "Home", "PERSIST");
    env.add_edge("dependencies", "a", "b");
    env.add_edge("contexts", "home", "a");

    let output = render(&env, &["a", "b", "home"]);

    assert!(output.contains("\"a\" -> \"b\" [style=\"solid\"];"));
    assert!(output.contains("\"home\" -> \"a\" [style=\"dashed\"];"));
}

// =============================================================================
// Bucket Clusters
// =============================================================================

#[test]
fn test_buckets_render_as_clusters() {
    let env = TestEnv::new();
    env.add_bucket_member("cur", "a");
    env.add_bucket_member("target", "b");

    // Bucket members need not be rendered nodes
    let output = render(&env, &[]);

    assert!(output.contains("subgraph \"cluster_cur\" {"));
    assert!(output.contains("subgraph \"cluster_target\" {"));
    assert!(output.contains("label = \"cur\";"));
}

#[test]
fn test_all_fixed_buckets_emitted_even_when_empty() {
    let env = TestEnv::new();
    let output = render(&env, &[]);

    for name in CLUSTER_BUCKETS {
        assert!(output.contains(&format!("subgraph \"cluster_{name}\" {{")));
    }
}
