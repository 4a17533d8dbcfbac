//! Survey query commands
//!
//! Every query command loads the dataset, validates the facet flags the query
//! applies against it, runs one [`QueryKind`] through [`SurveyQuery`] and
//! writes the outcome as a table or as JSON.

mod table;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use skillscope_analysis::{
    config::AnalysisConfig,
    facet::{FacetDimension, FacetSelection, UnknownFacetValueError},
    outcome::Outcome,
    query::{QueryKind, SurveyQuery},
};
use skillscope_survey::RecordStore;
use tracing::{debug, info, warn};

use crate::{
    command::{DatasetArg, FacetArg, Format, OutputArg},
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct QueryArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Path to a JSON file with analysis limits
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[clap(flatten)]
    pub facets: FacetArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopArg {
    #[clap(flatten)]
    pub query: QueryArg,

    /// Number of skills to report (overrides the config file)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct RegionalSkillArg {
    #[clap(flatten)]
    pub query: QueryArg,

    /// Skill to look up (defaults to the first skill in alphabetical order)
    #[arg(long)]
    pub skill: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CompareGendersArg {
    #[clap(flatten)]
    pub query: QueryArg,

    /// Number of skills to compare (overrides the config file)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct RecordsArg {
    #[clap(flatten)]
    pub query: QueryArg,

    /// Only trainees whose training needs include this skill
    #[arg(long)]
    pub skill: Option<String>,
}

pub(crate) fn run_genders(arg: &QueryArg) -> anyhow::Result<()> {
    arg.execute(|_| QueryKind::GenderDistribution, |_| {})
}

pub(crate) fn run_regions(arg: &QueryArg) -> anyhow::Result<()> {
    arg.execute(|_| QueryKind::RegionDistribution, |_| {})
}

pub(crate) fn run_top_needs(arg: &TopArg) -> anyhow::Result<()> {
    arg.query.execute(
        |_| QueryKind::TopNeeds,
        |config| {
            if let Some(limit) = arg.limit {
                config.top_needs_limit = limit;
            }
        },
    )
}

pub(crate) fn run_regional_skill(arg: &RegionalSkillArg) -> anyhow::Result<()> {
    arg.query.execute(
        |store| {
            let skill = arg.skill.clone().or_else(|| {
                let skill = store.default_skill()?;
                info!(skill, "no skill given, using the first skill option");
                Some(skill.to_owned())
            });
            QueryKind::RegionalSkill { skill }
        },
        |_| {},
    )
}

pub(crate) fn run_regional_top(arg: &TopArg) -> anyhow::Result<()> {
    arg.query.execute(
        |_| QueryKind::RegionalTop,
        |config| {
            if let Some(limit) = arg.limit {
                config.regional_top_limit = limit;
            }
        },
    )
}

pub(crate) fn run_compare_genders(arg: &CompareGendersArg) -> anyhow::Result<()> {
    arg.query.execute(
        |_| QueryKind::GenderComparison,
        |config| {
            if let Some(limit) = arg.limit {
                config.comparison_limit = limit;
            }
        },
    )
}

pub(crate) fn run_records(arg: &RecordsArg) -> anyhow::Result<()> {
    arg.query.execute(
        |_| QueryKind::Records {
            skill: arg.skill.clone(),
        },
        |_| {},
    )
}

impl QueryArg {
    fn execute<K, C>(&self, kind: K, configure: C) -> anyhow::Result<()>
    where
        K: FnOnce(&RecordStore) -> QueryKind,
        C: FnOnce(&mut AnalysisConfig),
    {
        let store = self.dataset.load()?;
        let mut config = util::read_config_file(self.config.as_deref())?;
        configure(&mut config);

        let selection = self.facets.selection();
        let kind = kind(&store);
        validate_facets(&selection, &store, &kind)
            .with_context(|| format!("Invalid filter for {}", self.dataset.dataset.display()))?;

        debug!(?kind, ?selection, ?config, "running query");
        let outcome = SurveyQuery::with_config(&store, config).run(&selection, &kind);
        match &outcome {
            Outcome::Data(_) => {}
            Outcome::NoData(reason) => warn!(%reason, "query produced no data"),
            Outcome::InsufficientComparisonData(gap) => warn!(%gap, "comparison not possible"),
        }

        let mut output = Output::from_output_path(self.output.output_path())?;
        match self.output.format {
            Format::Json => output.write_json(&outcome)?,
            Format::Table => {
                table::write_outcome(&mut output, &selection, &outcome).with_context(|| {
                    format!("Failed to write table to {}", output.display_path())
                })?;
                output.finish()?;
            }
        }
        Ok(())
    }
}

/// Checks the selected values of the facets `kind` applies. Facets the query
/// ignores are logged and left unchecked.
fn validate_facets(
    selection: &FacetSelection,
    store: &RecordStore,
    kind: &QueryKind,
) -> Result<(), UnknownFacetValueError> {
    let applied = kind.facet_dimensions();
    for dimension in FacetDimension::ALL {
        if applied.contains(&dimension) {
            continue;
        }
        if let Some(value) = selection.value(dimension) {
            info!(field = %dimension.field(), value, "facet not applied by this query");
        }
    }
    selection.validate_dimensions(store, applied)
}
