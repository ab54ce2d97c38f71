use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::Path;

use version_gate::boundary::BoundaryWarning;
use version_gate::check::{check_consistency, ResolvedVersions};
use version_gate::config;
use version_gate::domain::{TagPattern, TagRef, Version};
use version_gate::error::VersionGateError;
use version_gate::extract;
use version_gate::git::{self, Git2Repository};
use version_gate::ui;

#[derive(clap::Parser)]
#[command(
    name = "version-gate",
    about = "Verify manifest, module, and tag versions agree before a release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Path to the packaging manifest")]
    manifest: Option<String>,

    #[arg(long, help = "Path to the module version file")]
    module: Option<String>,

    #[arg(
        short = 'r',
        long,
        help = "Tag reference to gate against (e.g. refs/tags/1.2.3)"
    )]
    git_ref: Option<String>,

    #[arg(long, help = "Treat warnings as gate failures")]
    deny_warnings: bool,

    #[arg(long, help = "Resolve and display versions without gating")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-gate {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(2);
        }
    };

    let mut warnings: Vec<BoundaryWarning> = Vec::new();

    // Resolve the two file-backed versions
    let manifest_path = args
        .manifest
        .clone()
        .unwrap_or_else(|| config.files.manifest.clone());
    let module_path = args
        .module
        .clone()
        .unwrap_or_else(|| config.files.module.clone());

    let manifest_version =
        match extract::extract_version_from_file(Path::new(&manifest_path), &config.keys.manifest)
        {
            Ok(extracted) => extracted,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(2);
            }
        };
    if manifest_version.occurrences > 1 {
        warnings.push(BoundaryWarning::MultipleVersionKeys {
            path: manifest_path.clone(),
            key: config.keys.manifest.clone(),
            count: manifest_version.occurrences,
        });
    }

    let module_version =
        match extract::extract_version_from_file(Path::new(&module_path), &config.keys.module) {
            Ok(extracted) => extracted,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(2);
            }
        };
    if module_version.occurrences > 1 {
        warnings.push(BoundaryWarning::MultipleVersionKeys {
            path: module_path.clone(),
            key: config.keys.module.clone(),
            count: module_version.occurrences,
        });
    }

    // Resolve the reference: flag, then CI environment, then the repository
    let reference = match args.git_ref.clone() {
        Some(reference) => reference,
        None => match env::var("GITHUB_REF") {
            Ok(reference) if !reference.is_empty() => reference,
            _ => {
                ui::display_status("No tag reference given; detecting from repository...");
                match detect_reference(&mut warnings) {
                    Ok(reference) => reference,
                    Err(e) => {
                        ui::display_error(&e.to_string());
                        std::process::exit(2);
                    }
                }
            }
        },
    };

    let tag_ref = TagRef::new(reference.as_str());
    if !tag_ref.is_tag() {
        warnings.push(BoundaryWarning::NotATagRef {
            reference: reference.clone(),
        });
    }
    let short_name = tag_ref.short_name();

    // Map the tag short name through the configured pattern
    let pattern = TagPattern::new(config.tag.pattern.as_str());
    let tag_version = match pattern.extract(short_name) {
        Ok(Some(version)) => version,
        Ok(None) => {
            warnings.push(BoundaryWarning::TagMismatchPattern {
                tag: short_name.to_string(),
                pattern: config.tag.pattern.clone(),
            });
            short_name.to_string()
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(2);
        }
    };

    if Version::parse(&tag_version).is_err() {
        warnings.push(BoundaryWarning::UnparsableTag {
            tag: tag_version.clone(),
            reason: "Version number format not recognized".to_string(),
        });
    }

    let resolved = ResolvedVersions::new(manifest_version.value, module_version.value, tag_version);

    ui::display_resolved_versions(&resolved);

    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }

    if args.dry_run {
        ui::display_status("Dry run: skipping the gate");
        return Ok(());
    }

    if (args.deny_warnings || config.behavior.deny_warnings) && !warnings.is_empty() {
        ui::display_error(&format!(
            "{} warning(s) with deny-warnings enabled",
            warnings.len()
        ));
        std::process::exit(1);
    }

    let report = check_consistency(&resolved);
    if !report.is_consistent() {
        ui::display_check_report(&report);
        ui::display_error("Version mismatch! Aborting release.");
        std::process::exit(1);
    }

    ui::display_success(&format!("Versions are consistent: {}", resolved.manifest));
    Ok(())
}

/// Find the tag reference to gate against from the enclosing repository.
///
/// Uses the lexically first tag pointing at HEAD; several candidates add a
/// warning.
fn detect_reference(warnings: &mut Vec<BoundaryWarning>) -> version_gate::Result<String> {
    let repo = Git2Repository::open(".")?;
    let mut tags = git::tags_at_head(&repo)?;

    if tags.is_empty() {
        return Err(VersionGateError::git_ref(
            "No tag points at HEAD and no reference was provided",
        ));
    }

    if tags.len() > 1 {
        warnings.push(BoundaryWarning::MultipleTagsAtHead {
            count: tags.len(),
            chosen: tags[0].clone(),
        });
    }

    Ok(tags.remove(0))
}
