use crate::graph_analysis::domain::Manifest;
use crate::ports::outbound::{ManifestFetcher, ManifestParser, ProgressReporter};
use crate::shared::error::PomGraphError;
use crate::shared::Result;
use futures::future::join_all;
use std::cell::Cell;

/// Well-known manifest filename appended to every candidate location
pub const MANIFEST_FILENAME: &str = "pom.xml";

/// Nesting limit for module recursion; deeper modules are reported and skipped
pub const MAX_MODULE_DEPTH: usize = 64;

/// A pending discovery step: the sub-path below the root and its nesting level
struct Candidate {
    sub_path: String,
    depth: usize,
}

/// DiscoverManifestsUseCase - the manifest locator
///
/// Walks a repository from its root manifest through every declared
/// module, depth-first and pre-order. A location that cannot be fetched or
/// parsed ends that branch only; the failure is reported and discovery
/// carries on with its siblings.
///
/// # Type Parameters
/// * `F` - ManifestFetcher implementation
/// * `P` - ManifestParser implementation
/// * `PR` - ProgressReporter implementation
pub struct DiscoverManifestsUseCase<F, P, PR> {
    fetcher: F,
    parser: P,
    progress_reporter: PR,
}

impl<F, P, PR> DiscoverManifestsUseCase<F, P, PR>
where
    F: ManifestFetcher,
    P: ManifestParser,
    PR: ProgressReporter,
{
    pub fn new(fetcher: F, parser: P, progress_reporter: PR) -> Self {
        Self {
            fetcher,
            parser,
            progress_reporter,
        }
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Discovers every repository in `roots` concurrently.
    ///
    /// The result is concatenated in input order, whatever order the
    /// repositories finish in.
    pub async fn discover_all(&self, roots: &[String]) -> Vec<Manifest> {
        let total = roots.len();
        let finished = Cell::new(0usize);

        let discoveries = roots.iter().map(|root| {
            let finished = &finished;
            async move {
                let manifests = self.discover(root).await;
                finished.set(finished.get() + 1);
                self.progress_reporter
                    .report_progress(finished.get(), total, Some(root.as_str()));
                manifests
            }
        });

        join_all(discoveries).await.into_iter().flatten().collect()
    }

    /// Discovers the manifests of a single repository, parents before children
    pub async fn discover(&self, root: &str) -> Vec<Manifest> {
        let root = normalise_root(root);
        let mut manifests = Vec::new();
        let mut pending = vec![Candidate {
            sub_path: String::new(),
            depth: 0,
        }];

        while let Some(candidate) = pending.pop() {
            let location = format!("{}{}{}", root, candidate.sub_path, MANIFEST_FILENAME);

            let manifest = match self.load(&location).await {
                Ok(manifest) => manifest,
                Err(e) => {
                    self.report_skipped(&location, &e);
                    continue;
                }
            };

            if !manifest.modules().is_empty() && candidate.depth >= MAX_MODULE_DEPTH {
                self.progress_reporter.report_error(&format!(
                    "Not descending into modules of {}: nesting exceeds {} levels",
                    location, MAX_MODULE_DEPTH
                ));
            } else {
                // Reversed so the first declared module is popped first
                for module in manifest.modules().iter().rev() {
                    pending.push(Candidate {
                        sub_path: format!(
                            "{}{}/",
                            candidate.sub_path,
                            module.trim_end_matches('/')
                        ),
                        depth: candidate.depth + 1,
                    });
                }
            }

            manifests.push(manifest);
        }

        manifests
    }

    fn report_skipped(&self, location: &str, error: &anyhow::Error) {
        let expected = error
            .downcast_ref::<PomGraphError>()
            .is_some_and(PomGraphError::is_manifest_failure);
        if expected {
            self.progress_reporter
                .report_error(&format!("Skipping {}: {}", location, error));
        } else {
            self.progress_reporter.report_error(&format!(
                "Skipping {} after unexpected error: {:#}",
                location, error
            ));
        }
    }

    async fn load(&self, location: &str) -> Result<Manifest> {
        let staged = self.fetcher.fetch(location).await?;
        let content = staged.read_to_string()?;
        self.parser.parse(staged.location(), &content)
    }
}

fn normalise_root(root: &str) -> String {
    let root = root.trim();
    if root.is_empty() || root.ends_with('/') {
        root.to_string()
    } else {
        format!("{}/", root)
    }
}
