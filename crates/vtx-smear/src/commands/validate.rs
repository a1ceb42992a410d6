use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{ArgGroup, Args};
use vtx_catalog::{Catalog, ExportDocument};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["catalog", "document"])))]
pub struct ValidateArgs {
    /// YAML catalog to check against the built-in scenarios.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Export document written by `select` (YAML when the extension is `.yaml` or `.yml`).
    #[arg(long)]
    pub document: Option<PathBuf>,
}

pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &args.catalog {
        let builtin = Catalog::builtin().len();
        let catalog = Catalog::builtin().with_file(path)?;
        println!(
            "ok: {} adds {} scenarios",
            path.display(),
            catalog.len() - builtin
        );
    }
    if let Some(path) = &args.document {
        let text = fs::read_to_string(path)?;
        let document = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => ExportDocument::from_yaml(&text)?,
            _ => ExportDocument::from_json(&text)?,
        };
        document.verify()?;
        println!(
            "ok: {} {}",
            document.provenance.parameter_set, document.config_hash
        );
    }
    Ok(())
}
