//! Query result tables
//!
//! Renders a query [`Outcome`] as fixed-width text tables. Outcomes without
//! data print their reason instead of an empty table.

use std::io::{self, Write};

use skillscope_analysis::{
    aggregate::{ComparisonRow, RegionTop, RegionalSkill},
    facet::FacetSelection,
    outcome::Outcome,
    query::QueryResult,
};
use skillscope_stats::share::Share;
use skillscope_survey::{Gender, Record};

/// Print `outcome` under a title derived from the query and selection
pub(super) fn write_outcome<W>(
    out: &mut W,
    selection: &FacetSelection,
    outcome: &Outcome<QueryResult>,
) -> io::Result<()>
where
    W: Write,
{
    match outcome {
        Outcome::Data(result) => write_result(out, selection, result),
        Outcome::NoData(reason) => writeln!(out, "{reason}"),
        Outcome::InsufficientComparisonData(gap) => writeln!(out, "{gap}"),
    }
}

fn write_result<W>(out: &mut W, selection: &FacetSelection, result: &QueryResult) -> io::Result<()>
where
    W: Write,
{
    let category = selection.skill_category.title();
    match result {
        QueryResult::GenderDistribution(shares) => {
            write_title(out, "Gender Distribution")?;
            write_share_table(out, "Gender", shares)
        }
        QueryResult::RegionDistribution(shares) => {
            write_title(out, "Region Distribution")?;
            write_share_table(out, "Region", shares)
        }
        QueryResult::TopNeeds(shares) => {
            write_title(out, &format!("Top {} {category}", shares.len()))?;
            write_share_table(out, "Skill", shares)
        }
        QueryResult::RegionalSkill(report) => write_regional_skill(out, report),
        QueryResult::RegionalTop(regions) => write_regional_top(out, category, regions),
        QueryResult::GenderComparison(rows) => {
            write_title(out, &format!("{category} by Gender"))?;
            write_comparison_table(out, rows)
        }
        QueryResult::Records(records) => {
            write_title(out, &format!("Trainees ({})", records.len()))?;
            write_record_table(out, records)
        }
    }
}

fn write_title<W>(out: &mut W, title: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)
}

/// Print a share table
///
/// # Arguments
/// * `label_col` - Name of the key column (e.g., "Skill", "Region")
/// * `shares` - Ranked shares
fn write_share_table<W>(out: &mut W, label_col: &str, shares: &[Share<String>]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:<30} {:>8} {:>12} {:>8} {:>9}",
        label_col, "Count", "Respondents", "Base", "Percent",
    )?;
    // label(30) + count(8) + respondents(12) + base(8) + percent(9) + spaces(4)
    writeln!(out, "  {}", "-".repeat(71))?;
    for share in shares {
        writeln!(
            out,
            "  {:<30} {:>8} {:>12} {:>8} {:>8.1}%",
            share.key, share.count, share.respondents, share.denominator, share.percentage,
        )?;
    }
    Ok(())
}

fn write_regional_skill<W>(out: &mut W, report: &RegionalSkill) -> io::Result<()>
where
    W: Write,
{
    let title = format!("Respondents Requesting {} by Region", report.skill);
    write_title(out, &title)?;
    write_share_table(out, "Region", &report.regions)
}

fn write_regional_top<W>(out: &mut W, category: &str, regions: &[RegionTop]) -> io::Result<()>
where
    W: Write,
{
    write_title(out, &format!("Top {category} by Region"))?;
    for (i, region) in regions.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{} ({} respondents)",
            region.region, region.respondents
        )?;
        write_share_table(out, "Skill", &region.top)?;
    }
    Ok(())
}

fn write_comparison_table<W>(out: &mut W, rows: &[ComparisonRow]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:<30} {:>8} {:>8} {:>8} {:>8}",
        "Skill", "Male", "Male%", "Female", "Female%",
    )?;
    // label(30) + 4 * value(8) + spaces(4)
    writeln!(out, "  {}", "-".repeat(66))?;
    for row in rows {
        let male = row.share(Gender::Male);
        let female = row.share(Gender::Female);
        writeln!(
            out,
            "  {:<30} {:>8} {:>7.1}% {:>8} {:>7.1}%",
            row.token, male.count, male.percentage, female.count, female.percentage,
        )?;
    }
    if let Some(row) = rows.first() {
        writeln!(
            out,
            "  (Percent of mentions, not respondents. Mentions by male: {}, female: {})",
            row.male.denominator, row.female.denominator
        )?;
    }
    Ok(())
}

fn write_record_table<W>(out: &mut W, records: &[Record]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:<20} {:<8} {:<8} {:<14} {:<18} {:<14} Training needs",
        "Name", "Gender", "Age", "Region", "Education", "Status",
    )?;
    writeln!(out, "  {}", "-".repeat(100))?;
    for record in records {
        writeln!(
            out,
            "  {:<20} {:<8} {:<8} {:<14} {:<18} {:<14} {}",
            cell(record.name.as_deref()),
            cell(record.gender.as_deref()),
            cell(record.age_band.as_deref()),
            cell(record.region.as_deref()),
            cell(record.education.as_deref()),
            cell(record.current_status.as_deref()),
            cell(record.training_needs_text.as_deref()),
        )?;
    }
    Ok(())
}

fn cell(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
