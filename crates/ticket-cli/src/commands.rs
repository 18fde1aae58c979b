use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, info_span};

use ticket_model::EntityClass;
use ticket_normalize::{Normalizer, NormalizerConfig, NormalizerSet};

use ticket_cli::review::{ReviewTally, review_set};
use ticket_cli::types::{IngestResult, NormalizeResult, PendingRow, ValueResolution};

use crate::cli::{IngestArgs, NormalizeArgs, NormalizerArgs, ShowArgs};

/// Config file values with command-line overrides applied.
pub fn load_config(args: &NormalizerArgs) -> Result<NormalizerConfig> {
    let mut config = match &args.config {
        Some(path) => NormalizerConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => NormalizerConfig::default(),
    };
    if let Some(dir) = &args.mappings_dir {
        config.mappings_dir.clone_from(dir);
    }
    if let Some(auto) = args.auto_threshold {
        config.auto_threshold = auto;
    }
    if let Some(suggest) = args.suggest_threshold {
        config.suggest_threshold = suggest;
    }
    if args.no_seed {
        config.seed_vocabulary = false;
    }
    Ok(config)
}

fn open_set(config: &NormalizerConfig) -> Result<NormalizerSet> {
    NormalizerSet::open(config).context("build normalizers")
}

pub fn run_normalize(args: &NormalizeArgs, config: &NormalizerConfig) -> Result<NormalizeResult> {
    let class = EntityClass::from(args.class);
    let _span = info_span!("normalize", class = %class).entered();
    let mut set = open_set(config)?;

    let normalizer = set.get_mut(class);
    let values = args
        .values
        .iter()
        .map(|raw| ValueResolution {
            raw: raw.clone(),
            resolution: if args.unchecked {
                normalizer.resolve(raw)
            } else {
                normalizer.resolve_checked(raw)
            },
        })
        .collect();

    let review = if args.review {
        Some(review_all(&mut set)?)
    } else {
        None
    };
    let saved = (!args.dry_run).then(|| set.save_all());
    Ok(NormalizeResult {
        class,
        values,
        pending: PendingRow::collect(&set),
        review,
        saved,
    })
}

pub fn run_ingest(args: &IngestArgs, config: &NormalizerConfig) -> Result<IngestResult> {
    let _span = info_span!("ingest", file = %args.file.display()).entered();
    let mut document = read_document(&args.file)?;
    let mut set = open_set(config)?;
    let records = set.normalize_document(&mut document);
    info!(records, "normalized records");

    let review = if args.review {
        Some(review_all(&mut set)?)
    } else {
        None
    };

    let (output, saved) = if args.dry_run {
        (None, None)
    } else {
        let output = args.output.clone().unwrap_or_else(|| args.file.clone());
        write_document(&output, &document)?;
        (Some(output), Some(set.save_all()))
    };
    Ok(IngestResult {
        input: args.file.clone(),
        output,
        records,
        pending: PendingRow::collect(&set),
        review,
        saved,
    })
}

pub fn run_show(args: &ShowArgs, config: &NormalizerConfig) -> Result<()> {
    let set = open_set(config)?;
    let views: Vec<_> = match args.class {
        Some(class) => vec![set.get(class.into()).view()],
        None => set.iter().map(Normalizer::view).collect(),
    };
    if args.json {
        let json = serde_json::to_string_pretty(&views).context("serialize mappings")?;
        println!("{json}");
    } else {
        ticket_cli::summary::print_views(&views);
    }
    Ok(())
}

fn review_all(set: &mut NormalizerSet) -> Result<ReviewTally> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    review_set(set, &mut input, &mut output).context("interactive review")
}

fn read_document(path: &Path) -> Result<Value> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse JSON {}", path.display()))
}

fn write_document(path: &Path, document: &Value) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document).context("serialize document")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}
