use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use vtx_catalog::serde_io::to_json_string;

use super::load_catalog;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Scenario or parameter-set name.
    pub name: String,
    /// YAML catalog merged over the built-in scenarios.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Print `Field = value` lines instead of JSON.
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let entry = catalog.get(&args.name)?;

    if !args.text {
        println!("{}", to_json_string(entry)?);
        return Ok(());
    }

    println!("{} ({})", entry.parameter_set_name(), entry.parameters().generator());
    if let Some(description) = entry.description() {
        for line in description.lines() {
            println!("# {line}");
        }
    }
    for (field, value) in entry.parameters().fields() {
        println!("{field:<12} = {value}");
    }
    if let Some(beta) = entry.parameters().as_beta_function() {
        // Derived; not part of the record.
        println!(
            "# transverse beam size {:.1} microns",
            beta.transverse_beam_size() * 1.0e4
        );
    }
    Ok(())
}
