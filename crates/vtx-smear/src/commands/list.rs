use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use vtx_catalog::CatalogEntry;
use vtx_core::SmearingVariant;

use super::load_catalog;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list one model: gaussian, flat or beta-function.
    #[arg(long)]
    pub variant: Option<SmearingVariant>,
    /// YAML catalog merged over the built-in scenarios.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    name: &'a str,
    variant: SmearingVariant,
    generator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<&'a CatalogEntry> for Row<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            name: entry.name(),
            variant: entry.variant(),
            generator: entry.parameters().generator(),
            description: entry.description(),
        }
    }
}

pub fn run(args: &ListArgs) -> Result<(), Box<dyn Error>> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let rows: Vec<Row<'_>> = catalog
        .entries()
        .filter(|entry| args.variant.map_or(true, |variant| entry.variant() == variant))
        .map(Row::from)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        println!(
            "{:<32} {:<14} {}",
            row.name,
            row.variant.as_str(),
            row.description.map(|d| d.replace('\n', " ")).unwrap_or_default()
        );
    }
    Ok(())
}
