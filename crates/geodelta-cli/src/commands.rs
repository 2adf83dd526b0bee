use std::collections::BTreeMap;

use anyhow::Context;
use colored::Colorize;
use geodelta_diff::diff_layers;
use geodelta_layer::Layer;
use geodelta_types::{ChangeType, CHANGE_TYPE_FIELD};

use crate::cli::{Cli, Command, DiffArgs, InfoArgs, OutputFormat};
use crate::geojson_io;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &cli.format),
        Command::Info(args) => cmd_info(args, &cli.format),
    }
}

fn cmd_diff(args: DiffArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let old = geojson_io::read_layer(&args.old)
        .with_context(|| format!("reading {}", args.old.display()))?;
    let new = geojson_io::read_layer(&args.new)
        .with_context(|| format!("reading {}", args.new.display()))?;

    let diff = diff_layers(&old, &new, &args.key)?;

    let mut counts: BTreeMap<ChangeType, usize> = BTreeMap::new();
    for feature in diff.features() {
        let tag: ChangeType = feature.attr(CHANGE_TYPE_FIELD).to_string().parse()?;
        *counts.entry(tag).or_default() += 1;
    }

    if let Some(path) = &args.output {
        geojson_io::write_layer(path, &diff)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "key": args.key,
                "old_features": old.feature_count(),
                "new_features": new.feature_count(),
                "records": diff.len(),
                "counts": counts
                    .iter()
                    .map(|(tag, n)| (tag.as_str().to_string(), *n))
                    .collect::<BTreeMap<String, usize>>(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!(
                "Compared {} old and {} new features on key {}",
                old.feature_count().to_string().bold(),
                new.feature_count().to_string().bold(),
                args.key.yellow(),
            );
            for tag in ChangeType::ALL {
                let n = counts.get(&tag).copied().unwrap_or(0);
                println!("  {:>6}  {}", n, painted(tag));
            }
            if let Some(path) = &args.output {
                println!(
                    "{} Wrote {} records to {}",
                    "✓".green().bold(),
                    diff.len(),
                    path.display().to_string().bold(),
                );
            }
        }
    }
    Ok(())
}

/// Category colors follow the host rendering convention: added green,
/// deleted gray, attr blue, geom red, geom_diff orange.
fn painted(tag: ChangeType) -> colored::ColoredString {
    match tag {
        ChangeType::Added => tag.as_str().green(),
        ChangeType::Deleted => tag.as_str().dimmed(),
        ChangeType::Attr => tag.as_str().blue(),
        ChangeType::Geom => tag.as_str().red(),
        ChangeType::GeomDiff => tag.as_str().yellow(),
    }
}

fn cmd_info(args: InfoArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let layer = geojson_io::read_layer(&args.layer)
        .with_context(|| format!("reading {}", args.layer.display()))?;

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "features": layer.feature_count(),
                "geometry": layer.geometry_kind().to_string(),
                "spatial_ref": layer.spatial_ref().as_str(),
                "fields": layer
                    .schema()
                    .iter()
                    .map(|f| serde_json::json!({"name": f.name, "type": f.ty}))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!("{}", args.layer.display().to_string().bold());
            println!("  Features: {}", layer.feature_count());
            println!(
                "  Geometry: {} ({})",
                layer.geometry_kind(),
                layer.spatial_ref(),
            );
            println!("  Fields:");
            for field in layer.schema().iter() {
                println!("    {}  {}", field.name.yellow(), field.ty.to_string().dimmed());
            }
        }
    }
    Ok(())
}
