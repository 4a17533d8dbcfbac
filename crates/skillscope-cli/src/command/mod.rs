use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use skillscope_analysis::facet::{Facet, FacetSelection, SkillCategory};
use skillscope_survey::{Gender, RecordStore};

use crate::util;

use self::{
    options::OptionsArg,
    query::{CompareGendersArg, QueryArg, RecordsArg, RegionalSkillArg, TopArg},
};

mod options;
mod query;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List the regions, age bands, genders and skills present in a dataset
    Options(#[clap(flatten)] OptionsArg),
    /// Gender distribution of the selected respondents
    Genders(#[clap(flatten)] QueryArg),
    /// Region distribution of the selected respondents
    Regions(#[clap(flatten)] QueryArg),
    /// Most requested skills of the selected category
    TopNeeds(#[clap(flatten)] TopArg),
    /// Share of each region's respondents requesting one skill
    RegionalSkill(#[clap(flatten)] RegionalSkillArg),
    /// Most requested skills per region
    RegionalTop(#[clap(flatten)] TopArg),
    /// Compare requested skills between male and female respondents
    CompareGenders(#[clap(flatten)] CompareGendersArg),
    /// List the selected trainees
    Records(#[clap(flatten)] RecordsArg),
}

pub fn run(args: CommandArgs) -> anyhow::Result<()> {
    match args.mode {
        Mode::Options(arg) => options::run(&arg)?,
        Mode::Genders(arg) => query::run_genders(&arg)?,
        Mode::Regions(arg) => query::run_regions(&arg)?,
        Mode::TopNeeds(arg) => query::run_top_needs(&arg)?,
        Mode::RegionalSkill(arg) => query::run_regional_skill(&arg)?,
        Mode::RegionalTop(arg) => query::run_regional_top(&arg)?,
        Mode::CompareGenders(arg) => query::run_compare_genders(&arg)?,
        Mode::Records(arg) => query::run_records(&arg)?,
    }
    Ok(())
}

#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the survey records JSON file
    pub dataset: PathBuf,
}

impl DatasetArg {
    pub(crate) fn load(&self) -> anyhow::Result<RecordStore> {
        util::read_records_file(&self.dataset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
    /// Overall training needs
    #[default]
    All,
    /// Technical skills
    Technical,
    /// Soft skills
    Soft,
}

impl From<CategoryArg> for SkillCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => SkillCategory::All,
            CategoryArg::Technical => SkillCategory::Technical,
            CategoryArg::Soft => SkillCategory::Soft,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct FacetArg {
    /// Only respondents from this region
    #[arg(long)]
    pub region: Option<String>,

    /// Only respondents of this gender
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Only respondents in this age band
    #[arg(long)]
    pub age_band: Option<String>,

    /// Which skill field to analyze
    #[arg(long, value_enum, default_value_t)]
    pub category: CategoryArg,
}

impl FacetArg {
    pub(crate) fn selection(&self) -> FacetSelection {
        FacetSelection {
            region: Facet::from(self.region.clone()),
            gender: Facet::from(self.gender.map(Gender::from)),
            age_band: Facet::from(self.age_band.clone()),
            skill_category: self.category.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct OutputArg {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Write the result to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArg {
    pub(crate) fn output_path(&self) -> Option<PathBuf> {
        self.output.clone()
    }
}
