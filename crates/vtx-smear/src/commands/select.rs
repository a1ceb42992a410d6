use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;
use vtx_catalog::{export, SelectionConfig};

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Scenario or parameter-set name.
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    pub scenario: Option<String>,
    /// YAML selection file (`scenario`, optional `src` and `catalog`).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Input tag for the common binding; overrides the selection file.
    #[arg(long)]
    pub src: Option<String>,
    /// YAML catalog merged over the built-in scenarios; overrides the selection file.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Write the export document here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Emit YAML instead of JSON.
    #[arg(long)]
    pub yaml: bool,
}

pub fn run(args: &SelectArgs) -> Result<(), Box<dyn Error>> {
    let mut selection = match (&args.config, &args.scenario) {
        (Some(path), _) => SelectionConfig::load(path)?,
        (None, Some(scenario)) => SelectionConfig::new(scenario.clone()),
        (None, None) => return Err("either --scenario or --config is required".into()),
    };
    if let Some(src) = &args.src {
        selection.src = src.clone();
    }
    if let Some(catalog) = &args.catalog {
        selection.catalog = Some(catalog.clone());
    }

    let catalog = selection.catalog()?;
    let document = export(&catalog, &selection.scenario, &selection.common())?;
    let text = if args.yaml {
        document.to_yaml()?
    } else {
        document.to_json()?
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
            info!(
                "wrote {} ({}) to {}",
                document.provenance.parameter_set,
                document.config.generator(),
                path.display()
            );
        }
        None => println!("{text}"),
    }
    Ok(())
}
