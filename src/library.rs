//! The font library store.
//!
//! `FontLibrary` owns the session's font list and the ingestion pipeline. It
//! is the only writer of that list: views read snapshots and issue commands
//! through the backend. Every change to the list regenerates the stylesheet
//! and hands it to the [`StyleRegistry`].

use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::archive::{self, Expansion};
use crate::error::IngestError;
use crate::font::{self, Font, SourceContent, SourceFile};
use crate::notify::{Notification, Notifier, StyleRegistry};
use crate::stylesheet;
use crate::validation;

/// Shared "ingestion in flight" flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn enter(&self) -> BusyGuard {
        self.0.store(true, Ordering::Release);
        BusyGuard(Arc::clone(&self.0))
    }
}

/// Clears the busy flag when dropped, on every exit path.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Knobs for the ingestion pipeline.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Mime types accepted in addition to `font/ttf` and `font/otf`.
    pub extra_mime_types: Vec<String>,
}

/// Outcome of one `add_fonts` batch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    pub added: usize,
    /// Derived names rejected because they already existed.
    pub duplicates: Vec<String>,
    /// Files (and unreadable archives) tallied in the "invalid files" count.
    pub invalid: usize,
    /// Archives that could not be opened.
    pub archive_errors: Vec<String>,
}

pub struct FontLibrary {
    fonts: Vec<Font>,
    busy: BusyFlag,
    stylesheet: String,
    options: IngestOptions,
    notifier: Arc<dyn Notifier>,
    styles: Arc<dyn StyleRegistry>,
}

impl FontLibrary {
    pub fn new(notifier: Arc<dyn Notifier>, styles: Arc<dyn StyleRegistry>) -> Self {
        Self {
            fonts: Vec::new(),
            busy: BusyFlag::default(),
            stylesheet: String::new(),
            options: IngestOptions::default(),
            notifier,
            styles,
        }
    }

    /// Share an externally created busy flag (e.g. one the UI already holds).
    pub fn with_busy_flag(mut self, busy: BusyFlag) -> Self {
        self.busy = busy;
        self
    }

    pub fn with_options(mut self, options: IngestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    pub fn font(&self, id: &str) -> Option<&Font> {
        self.fonts.iter().find(|f| f.id == id)
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Current `@font-face` stylesheet text.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Ingest a batch of files and zip archives.
    ///
    /// Never fails: every rejection resolves into a notification and the
    /// returned report. New fonts are committed in one update, in input order.
    pub async fn add_fonts(&mut self, batch: Vec<SourceFile>) -> BatchReport {
        let _busy = self.busy.enter();
        let mut report = BatchReport::default();
        info!(files = batch.len(), "Ingesting font batch");

        let mut candidates = Vec::with_capacity(batch.len());
        for source in batch {
            if !validation::is_zip_name(&source.name) {
                candidates.push(source);
                continue;
            }
            match expand_archive(&source).await {
                Ok(Expansion { fonts, rejected }) => {
                    debug!(archive = %source.name, fonts = fonts.len(), rejected = rejected.len(), "Expanded archive");
                    for err in rejected {
                        self.reject(&mut report, err);
                    }
                    candidates.extend(fonts.into_iter().map(|entry| SourceFile {
                        name: entry.name,
                        last_modified: source.last_modified,
                        mime: String::new(),
                        content: SourceContent::Bytes(entry.bytes),
                    }));
                }
                Err(err) => {
                    warn!(error = %err, "Archive rejected");
                    self.notifier
                        .notify(Notification::archive_unreadable(&source.name));
                    report.archive_errors.push(source.name.clone());
                    report.invalid += 1;
                }
            }
        }

        let mut taken: HashSet<String> = self.fonts.iter().map(|f| f.name.clone()).collect();
        let mut accepted = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !validation::is_font_candidate(
                &candidate.name,
                &candidate.mime,
                &self.options.extra_mime_types,
            ) {
                self.reject(
                    &mut report,
                    IngestError::InvalidFileType {
                        name: candidate.name,
                    },
                );
                continue;
            }
            let name = validation::font_name_from_file(&candidate.name);
            if !taken.insert(name.clone()) {
                self.reject(&mut report, IngestError::DuplicateFontName { name });
                continue;
            }
            accepted.push((name, candidate));
        }

        let mut reads = JoinSet::new();
        for (index, (name, candidate)) in accepted.into_iter().enumerate() {
            reads.spawn(async move { (index, load_font(name, candidate).await) });
        }
        let mut loaded = Vec::with_capacity(reads.len());
        while let Some(joined) = reads.join_next().await {
            match joined {
                Ok((index, Ok(font))) => loaded.push((index, font)),
                Ok((_, Err(err))) => self.reject(&mut report, err),
                Err(e) => {
                    warn!(error = %e, "Font read task failed");
                    report.invalid += 1;
                }
            }
        }
        loaded.sort_by_key(|(index, _)| *index);

        report.added = loaded.len();
        if !loaded.is_empty() {
            self.fonts.extend(loaded.into_iter().map(|(_, font)| font));
            self.refresh_stylesheet();
            self.notifier
                .notify(Notification::fonts_added(report.added));
        }
        if report.invalid > 0 {
            self.notifier
                .notify(Notification::invalid_files(report.invalid));
        }

        info!(
            added = report.added,
            duplicates = report.duplicates.len(),
            invalid = report.invalid,
            total = self.fonts.len(),
            "Font batch complete"
        );
        report
    }

    /// Remove a font by id. Absent ids are a no-op.
    ///
    /// Returns whether anything was removed. The removal notification is sent
    /// either way.
    pub fn delete_font(&mut self, font_id: &str) -> bool {
        let before = self.fonts.len();
        self.fonts.retain(|f| f.id != font_id);
        let removed = self.fonts.len() != before;
        if removed {
            info!(id = font_id, "Font removed");
        } else {
            debug!(id = font_id, "Delete requested for unknown font");
        }
        self.refresh_stylesheet();
        self.notifier.notify(Notification::font_removed());
        removed
    }

    fn refresh_stylesheet(&mut self) {
        self.stylesheet = stylesheet::render(&self.fonts);
        self.styles.register_style(&self.stylesheet);
    }

    fn reject(&self, report: &mut BatchReport, err: IngestError) {
        match &err {
            IngestError::DuplicateFontName { name } => {
                debug!(name = %name, "Duplicate font name");
                self.notifier.notify(Notification::duplicate_font(name));
                report.duplicates.push(name.clone());
            }
            IngestError::Read { .. } => warn!(error = %err, "Font file unreadable"),
            _ => debug!(error = %err, "File rejected"),
        }
        if err.counts_as_invalid() {
            report.invalid += 1;
        }
    }
}

/// Load an archive's bytes and expand it off the async workers.
async fn expand_archive(source: &SourceFile) -> Result<Expansion, IngestError> {
    let bytes = source.read().await.map_err(|e| IngestError::Read {
        name: source.name.clone(),
        source: e,
    })?;
    let name = source.name.clone();
    tokio::task::spawn_blocking(move || archive::expand(&name, &bytes))
        .await
        .map_err(|e| IngestError::Read {
            name: source.name.clone(),
            source: io::Error::other(e),
        })?
}

/// Read a candidate's bytes and encode its data URI.
async fn load_font(name: String, candidate: SourceFile) -> Result<Font, IngestError> {
    let bytes = candidate.read().await.map_err(|e| IngestError::Read {
        name: candidate.name.clone(),
        source: e,
    })?;
    let file = font::font_file(&candidate.name, &candidate.mime, bytes);
    let last_modified = candidate.last_modified;
    tokio::task::spawn_blocking(move || Font::new(name, file, last_modified))
        .await
        .map_err(|e| IngestError::Read {
            name: candidate.name,
            source: io::Error::other(e),
        })
}
