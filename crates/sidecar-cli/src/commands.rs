use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use sidecar_ingest::{
    DataFormat, IngestError, SidecarOutput, generate_csv_metadata, generate_csv_sidecar,
    generate_json_metadata, generate_json_sidecar, generate_sidecar, list_data_files,
    render_sidecar,
};
use sidecar_terms::{
    CatalogLoader, ChainLoader, Manifest, SourceLoader, TermReport, extract_terms, write_terms,
};

use crate::cli::{FileArgs, MetadataArgs, TermsArgs};
use crate::config::{Settings, default_registry_root};

/// What a single-file command produced.
#[derive(Debug)]
pub enum FileOutput {
    Written(SidecarOutput),
    /// Rendered JSON, for `--stdout`.
    Rendered(String),
}

/// One sidecar written during a batch run.
#[derive(Debug)]
pub struct GeneratedSidecar {
    pub source: PathBuf,
    pub format: DataFormat,
    pub output: SidecarOutput,
}

/// Outcome of the `metadata` command.
#[derive(Debug, Default)]
pub struct MetadataRun {
    pub generated: Vec<GeneratedSidecar>,
    pub failures: Vec<(PathBuf, IngestError)>,
}

impl MetadataRun {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Outcome of the `terms` command.
#[derive(Debug)]
pub struct TermsRun {
    pub manifest: PathBuf,
    pub output: PathBuf,
    pub report: TermReport,
}

/// Describes one CSV or JSON file.
pub fn run_file(args: &FileArgs, format: DataFormat, settings: &Settings) -> Result<FileOutput> {
    let path = &args.file;
    let options = settings.metadata_options();

    if args.stdout {
        let record = match format {
            DataFormat::Csv => generate_csv_metadata(path, &options),
            DataFormat::Json => generate_json_metadata(path, &options),
        }
        .with_context(|| format!("describe {}", path.display()))?;
        let text = render_sidecar(&record).context("render metadata")?;
        return Ok(FileOutput::Rendered(text));
    }

    let location = settings.sidecar_location(args.output_dir.as_deref());
    let output = match format {
        DataFormat::Csv => generate_csv_sidecar(path, &options, &location),
        DataFormat::Json => generate_json_sidecar(path, &options, &location),
    }
    .with_context(|| format!("generate metadata for {}", path.display()))?;
    Ok(FileOutput::Written(output))
}

/// Writes sidecars for every given file and every data file in the given
/// folders. A failing file is recorded and the rest are still processed.
pub fn run_metadata(args: &MetadataArgs, settings: &Settings) -> Result<MetadataRun> {
    let options = settings.metadata_options();
    let location = settings.sidecar_location(args.output_dir.as_deref());

    let mut files = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            let found = list_data_files(path)
                .with_context(|| format!("list data files in {}", path.display()))?;
            debug!(dir = %path.display(), files = found.len(), "discovered data files");
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    let mut run = MetadataRun::default();
    for file in files {
        let result = DataFormat::from_path(&file).and_then(|format| {
            generate_sidecar(&file, &options, &location).map(|output| (format, output))
        });
        match result {
            Ok((format, output)) => run.generated.push(GeneratedSidecar {
                source: file,
                format,
                output,
            }),
            Err(error) => {
                warn!(path = %file.display(), %error, "metadata generation failed");
                run.failures.push((file, error));
            }
        }
    }
    Ok(run)
}

/// Extracts dependency terms and writes the word list.
pub fn run_terms(args: &TermsArgs, settings: &Settings) -> Result<TermsRun> {
    let manifest_path = args
        .manifest
        .clone()
        .unwrap_or_else(|| settings.terms.manifest.clone());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| settings.terms.output.clone());

    let manifest = Manifest::load(&manifest_path).context("load manifest")?;
    let names = manifest.candidate_names(&settings.terms.self_references);
    let loader = build_loader(args, settings);
    debug!(candidates = names.len(), loaders = loader.len(), "extracting terms");

    let report = extract_terms(&names, &loader);
    write_terms(&output, &report.terms).context("write term list")?;

    Ok(TermsRun {
        manifest: manifest_path,
        output,
        report,
    })
}

/// Catalogs first, then source scanning.
fn build_loader(args: &TermsArgs, settings: &Settings) -> ChainLoader {
    let mut loader = ChainLoader::new();

    if let Some(dir) = args
        .catalog_dir
        .as_ref()
        .or(settings.terms.catalog_dir.as_ref())
    {
        loader.push(CatalogLoader::new(dir));
    }

    let roots = if !args.source_roots.is_empty() {
        args.source_roots.clone()
    } else if !settings.terms.source_roots.is_empty() {
        settings.terms.source_roots.clone()
    } else {
        default_registry_root()
            .filter(|root| root.is_dir())
            .into_iter()
            .collect()
    };
    if !roots.is_empty() {
        loader.push(SourceLoader::new(roots));
    }

    loader
}

/// Absolute form of `path` for messages, or `path` itself if that fails.
pub fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
