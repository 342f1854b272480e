//! Generate Use Case
//!
//! Orchestrates one layout generation run:
//! 1. Validate the root (and optionally the manifest)
//! 2. Honour an existing layout.json unless forced
//! 3. Scan the tree and build the sorted layout
//! 4. Write layout.json
//! 5. Update `total_package_size` in manifest.json
//!
//! Expected outcomes are reported through `RunStatus`; only hard failures
//! (unreadable directory, corrupt manifest, failed write) are errors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::policies::ExclusionFilter;
use crate::domain::ports::{
    FileSystem, LayoutEvent, LayoutEventSink, ManifestRepository, ManifestUpdate, NoopEventSink,
};
use crate::domain::services::{scan_files, FileDisposition, LayoutBuilder};
use crate::domain::value_objects::{PackagePaths, MAX_PATH_CHARS};
use crate::error::{LayoutError, LayoutResult, ValidationFailure};
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::repositories::JsonManifestRepository;

use super::options::ProcessOptions;
use super::result::{ProcessResult, RunStatus};

/// Generate use case - one directory in, layout.json out
pub struct GenerateUseCase<FS, MR>
where
    FS: FileSystem,
    MR: ManifestRepository,
{
    file_system: FS,
    manifests: MR,
    filter: ExclusionFilter,
    events: Arc<dyn LayoutEventSink>,
}

impl GenerateUseCase<LocalFs, JsonManifestRepository<LocalFs>> {
    /// Use case wired to the local disk
    pub fn local() -> Self {
        Self::new(LocalFs::new(), JsonManifestRepository::new())
    }
}

impl<FS, MR> GenerateUseCase<FS, MR>
where
    FS: FileSystem,
    MR: ManifestRepository,
{
    pub fn new(file_system: FS, manifests: MR) -> Self {
        Self {
            file_system,
            manifests,
            filter: ExclusionFilter::new(),
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_filter(mut self, filter: ExclusionFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_event_sink(mut self, events: Arc<dyn LayoutEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Run once, returning hard failures as `Err`
    ///
    /// A relative `root` is resolved against the working directory first; the
    /// path ceiling is measured on absolute paths.
    pub fn execute(&self, root: &Path, options: &ProcessOptions) -> LayoutResult<ProcessResult> {
        let root = absolute_root(root);
        let root = root.as_path();
        let paths = PackagePaths::new(root);

        self.events.on_event(LayoutEvent::Started {
            root: root.to_path_buf(),
            force: options.force,
        });

        if !self.file_system.is_dir(root) {
            return Ok(ProcessResult::invalid(
                &paths,
                ValidationFailure::RootNotFound,
                0,
            ));
        }

        if options.check_manifest && !self.file_system.exists(paths.manifest()) {
            return Ok(ProcessResult::invalid(
                &paths,
                ValidationFailure::ManifestMissing,
                0,
            ));
        }

        if !options.force && self.file_system.exists(paths.layout()) {
            return Ok(ProcessResult::layout_exists(&paths));
        }

        let files = scan_files(&self.file_system, root)?;
        self.events.on_event(LayoutEvent::Scanned {
            file_count: files.len(),
        });

        let detailed = options.debug && self.events.wants_detailed_events();
        let mut builder = LayoutBuilder::new(&paths, &self.filter);
        for file in &files {
            let disposition = builder.add_file(file, |p| self.file_system.stat(p));
            if detailed {
                self.report_disposition(file, disposition);
            }
        }

        let built = match builder.finish() {
            Ok(built) => built,
            Err(rejected) => {
                self.report_long_paths(rejected.long_paths);
                return Ok(ProcessResult::invalid(
                    &paths,
                    rejected.failure,
                    rejected.skipped_files,
                )
                .with_long_paths(rejected.long_paths));
            }
        };
        self.report_long_paths(built.long_paths);

        let rendered = built
            .document
            .to_json_string()
            .map_err(|e| LayoutError::LayoutWrite {
                path: paths.layout().to_path_buf(),
                message: e.to_string(),
            })?;
        self.file_system
            .write(paths.layout(), &rendered)
            .map_err(|e| LayoutError::LayoutWrite {
                path: paths.layout().to_path_buf(),
                message: e.to_string(),
            })?;
        self.events.on_event(LayoutEvent::LayoutWritten {
            path: paths.layout().to_path_buf(),
            entries: built.document.len(),
            bytes: rendered.len(),
        });

        let total_size = built.total_size + rendered.len() as u64;
        self.update_manifest(&paths, total_size, options)?;

        self.events.on_event(LayoutEvent::Completed {
            file_count: built.document.len(),
            skipped_files: built.skipped_files,
            total_size,
        });

        Ok(ProcessResult::generated(
            &paths,
            built.document.len(),
            built.skipped_files,
            total_size,
        )
        .with_long_paths(built.long_paths))
    }

    /// Structured entry point: every outcome, including hard failures, is a result
    pub fn process(&self, root: &Path, options: &ProcessOptions) -> ProcessResult {
        match self.execute(root, options) {
            Ok(result) => result,
            Err(e) => {
                let message = if e.is_manifest_error() {
                    format!("layout.json was written, but manifest.json was not updated: {e}")
                } else {
                    e.to_string()
                };
                ProcessResult::failed(&PackagePaths::new(absolute_root(root)), message)
            }
        }
    }

    /// Fire-and-forget entry point: validation failures become errors,
    /// an existing layout is a quiet no-op
    pub fn run(&self, root: &Path, options: &ProcessOptions) -> LayoutResult<()> {
        let result = self.execute(root, options)?;
        match result.status {
            RunStatus::Invalid(failure) => Err(LayoutError::validation(failure, root)),
            RunStatus::Generated | RunStatus::LayoutExists | RunStatus::Failed => Ok(()),
        }
    }

    fn update_manifest(
        &self,
        paths: &PackagePaths,
        total_size: u64,
        options: &ProcessOptions,
    ) -> LayoutResult<()> {
        let manifest = paths.manifest().to_path_buf();

        if options.skip_manifest_update {
            self.events.on_event(LayoutEvent::ManifestSkipped {
                path: manifest,
                reason: "manifest update disabled".to_string(),
            });
            return Ok(());
        }

        if !self.file_system.exists(&manifest) {
            self.events.on_event(LayoutEvent::ManifestSkipped {
                path: manifest,
                reason: "manifest.json not found".to_string(),
            });
            return Ok(());
        }

        match self.manifests.update_total_size(&manifest, total_size)? {
            ManifestUpdate::Updated => self.events.on_event(LayoutEvent::ManifestUpdated {
                path: manifest,
                total_size,
            }),
            ManifestUpdate::NoSizeField => self.events.on_event(LayoutEvent::ManifestSkipped {
                path: manifest,
                reason: "no total_package_size field".to_string(),
            }),
        }
        Ok(())
    }

    fn report_disposition(&self, path: &Path, disposition: FileDisposition) {
        let reason = match disposition {
            FileDisposition::PackageDocument | FileDisposition::Included => return,
            FileDisposition::TooLong => format!("path longer than {} characters", MAX_PATH_CHARS),
            FileDisposition::StatFailed(message) => message,
            FileDisposition::Excluded => "excluded".to_string(),
        };
        self.events.on_event(LayoutEvent::FileSkipped {
            path: path.to_path_buf(),
            reason,
        });
    }

    fn report_long_paths(&self, count: usize) {
        if count > 0 {
            self.events.on_event(LayoutEvent::LongPathsSkipped {
                count,
                limit: MAX_PATH_CHARS,
            });
        }
    }
}

/// `root` made absolute without touching the filesystem; left as is if the
/// working directory is unavailable.
fn absolute_root(root: &Path) -> PathBuf {
    std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
}
