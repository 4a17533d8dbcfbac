//! Dataset option listing
//!
//! Prints the values each facet flag can take for a given dataset, and the
//! skills `regional-skill --skill` and `records --skill` accept.

use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use skillscope_survey::{FieldSelector, RecordStore};

use crate::{
    command::{DatasetArg, Format, OutputArg},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct OptionsArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Serialize)]
struct DatasetOptions<'a> {
    records: usize,
    regions: Vec<&'a str>,
    genders: Vec<&'a str>,
    age_bands: Vec<&'a str>,
    skills: Vec<&'a str>,
    default_skill: Option<&'a str>,
}

impl<'a> DatasetOptions<'a> {
    fn from_store(store: &'a RecordStore) -> Self {
        let skills = store.skill_options();
        Self {
            records: store.len(),
            regions: store.regions(),
            genders: store.distinct_values(FieldSelector::Gender),
            age_bands: store.age_bands(),
            default_skill: skills.first().copied(),
            skills,
        }
    }

    fn write_table<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(out, "Dataset Options ({} records)", self.records)?;
        writeln!(out, "==========================================")?;
        let lists = [
            ("Regions", &self.regions),
            ("Genders", &self.genders),
            ("Age bands", &self.age_bands),
            ("Skills", &self.skills),
        ];
        for (label, values) in lists {
            writeln!(out)?;
            writeln!(out, "{label} ({}):", values.len())?;
            for value in values {
                writeln!(out, "  {value}")?;
            }
        }
        if let Some(skill) = self.default_skill {
            writeln!(out)?;
            writeln!(out, "Default skill: {skill}")?;
        }
        Ok(())
    }
}

pub(crate) fn run(arg: &OptionsArg) -> anyhow::Result<()> {
    let store = arg.dataset.load()?;
    let options = DatasetOptions::from_store(&store);

    let mut output = Output::from_output_path(arg.output.output_path())?;
    match arg.output.format {
        Format::Json => output.write_json(&options)?,
        Format::Table => {
            options
                .write_table(&mut output)
                .with_context(|| format!("Failed to write table to {}", output.display_path()))?;
            output.finish()?;
        }
    }
    Ok(())
}
