use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use objmap_infer::{InferOptions, format_generated_type, infer_types};

use crate::sample::read_sample;

#[derive(Args)]
pub struct OutlineArgs {
    /// Path to the sample JSON document (`-` for stdin)
    input: PathBuf,

    /// Name of the root type
    #[arg(short = 'n', long, default_value = "Sample")]
    type_name: String,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OutlineArgs {
    pub fn run(self) -> Result<()> {
        let sample = read_sample(&self.input)?;
        let root = infer_types(&sample, &InferOptions::new(&self.type_name, ""))?;
        let text = format_generated_type(&root)?;

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
