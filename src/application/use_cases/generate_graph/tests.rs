use super::*;
use crate::adapters::outbound::parsers::PomXmlParser;
use crate::graph_analysis::policies::NamespaceRestriction;
use crate::graph_analysis::services::CanvasSize;
use crate::ports::outbound::StagedManifest;
use crate::shared::error::PomGraphError;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

struct MockFetcher {
    manifests: HashMap<String, String>,
}

impl MockFetcher {
    fn new(entries: &[(&str, String)]) -> Self {
        Self {
            manifests: entries
                .iter()
                .map(|(location, content)| (location.to_string(), content.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl ManifestFetcher for MockFetcher {
    async fn fetch(&self, location: &str) -> Result<StagedManifest> {
        let content = self
            .manifests
            .get(location)
            .ok_or_else(|| PomGraphError::ManifestNotFound {
                location: location.to_string(),
            })?;
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(StagedManifest::scratch(location, file.into_temp_path()))
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn pom(group: &str, artifact: &str, modules: &[&str], deps: &[(&str, &str, &str)]) -> String {
    let modules: String = modules
        .iter()
        .map(|m| format!("<module>{}</module>", m))
        .collect();
    let deps: String = deps
        .iter()
        .map(|(g, a, v)| {
            format!(
                "<dependency><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version></dependency>",
                g, a, v
            )
        })
        .collect();
    format!(
        "<project><groupId>{}</groupId><artifactId>{}</artifactId>\
         <modules>{}</modules><dependencies>{}</dependencies></project>",
        group, artifact, modules, deps
    )
}

fn two_module_repo() -> Vec<(&'static str, String)> {
    vec![
        ("repo/pom.xml", pom("com.x", "parent", &["core", "app"], &[])),
        ("repo/core/pom.xml", pom("com.x", "core", &[], &[])),
        (
            "repo/app/pom.xml",
            pom("com.x", "app", &[], &[("com.x", "core", "1.0")]),
        ),
    ]
}

fn request(restriction: &str) -> GraphRequest {
    GraphRequest::new(
        vec!["repo".to_string()],
        NamespaceRestriction::new(restriction),
        CanvasSize::default(),
        true,
    )
}

fn use_case(
    entries: &[(&str, String)],
) -> GenerateGraphUseCase<MockFetcher, PomXmlParser, MockProgressReporter> {
    GenerateGraphUseCase::new(
        MockFetcher::new(entries),
        PomXmlParser::new(),
        MockProgressReporter::default(),
    )
}

#[tokio::test]
async fn test_execute_renders_discovered_repository() {
    let use_case = use_case(&two_module_repo());

    let response = use_case.execute(request("")).await.unwrap();

    assert_eq!(response.manifest_count, 3);
    assert_eq!(response.group_count, 1);
    assert_eq!(response.artifact_count, 2);
    assert_eq!(response.indexed_edges, 1);
    assert!(response.skipped_edges().is_empty());

    let dot = response.dot();
    assert!(dot.starts_with("digraph G {\n    size=\"1000,1000\";\n"));
    assert!(dot.contains("label=\"com.x\";"));
    assert!(dot.contains("[label=\"core\", shape=box];"));
    assert!(dot.contains("[label=\"app\", shape=box];"));
    assert!(dot.contains("Node_0 -> Node_1 [color=blue,penwidth=1];"));
}

#[tokio::test]
async fn test_execute_with_unmatched_restriction_renders_empty_graph() {
    let use_case = use_case(&two_module_repo());

    let response = use_case.execute(request("com.y")).await.unwrap();

    assert_eq!(response.dot(), "digraph G {\n    size=\"1000,1000\";\n}\n\n");
    assert_eq!(response.filtered_dependencies, 1);
    assert_eq!(response.graph.node_count, 0);
    assert!(use_case
        .progress_reporter()
        .messages
        .borrow()
        .iter()
        .any(|m| m.contains("outside 'com.y'")));
}

#[tokio::test]
async fn test_execute_reports_broken_edges() {
    // org.* referrer is filtered out of the group index while its com.x
    // dependency is kept, so its edge has no source node
    let entries = vec![(
        "repo/pom.xml",
        pom("org.other", "consumer", &[], &[("com.x", "core", "1.0")]),
    )];
    let use_case = use_case(&entries);

    let response = use_case.execute(request("com.x")).await.unwrap();

    assert_eq!(response.skipped_edges().len(), 1);
    assert_eq!(response.graph.edge_count, 0);
    let errors = use_case.progress_reporter().errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("org.other:consumer -> com.x:core (1.0)"));
}

#[tokio::test]
async fn test_execute_with_no_manifests_is_not_an_error() {
    let use_case = use_case(&[]);

    let response = use_case.execute(request("")).await.unwrap();

    assert_eq!(response.manifest_count, 0);
    assert_eq!(response.dot(), "digraph G {\n    size=\"1000,1000\";\n}\n\n");
    assert_eq!(use_case.progress_reporter().errors.borrow().len(), 1);
}
