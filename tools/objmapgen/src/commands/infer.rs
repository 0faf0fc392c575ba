use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use objmap_infer::{InferOptions, infer, infer_types, render_type};

use crate::sample::read_sample;

#[derive(Args)]
pub struct InferArgs {
    /// Path to the sample JSON document (`-` for stdin)
    input: PathBuf,

    /// Name of the root type
    #[arg(short = 'n', long, default_value = "Sample")]
    type_name: String,

    /// Module path of the generated types, e.g. `generated` or `api::v1`
    #[arg(long, default_value = "generated")]
    namespace: String,

    /// Directory the generated sources are written to
    #[arg(short, long, required_unless_present = "dry_run")]
    output: Option<PathBuf>,

    /// Print the generated sources to stdout instead of writing them
    #[arg(long)]
    dry_run: bool,
}

impl InferArgs {
    pub fn run(self) -> Result<()> {
        let sample = read_sample(&self.input)?;
        let options = InferOptions::new(self.type_name, self.namespace);
        let Some(output) = self.output.filter(|_| !self.dry_run) else {
            let root = infer_types(&sample, &options)?;
            for ty in root.walk() {
                println!("// ---- {} ----", ty.file_name());
                print!("{}", render_type(ty)?);
            }
            return Ok(());
        };

        let report = infer(&sample, &options, &output)?;

        for path in &report.written {
            eprintln!("Written to {}", path.display());
        }
        if !report.is_complete() {
            for failure in &report.failures {
                eprintln!("Error: {failure}");
            }
            anyhow::bail!(
                "{} artifact(s) could not be written",
                report.failures.len()
            );
        }
        Ok(())
    }
}
