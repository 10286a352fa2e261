use super::common::{check_mark, format_thousands};
use crate::Result;
use crate::analysis::AnalysisRecord;
use crate::signals::DiscussionSummary;
use chrono::{DateTime, Local};
use core::fmt::Write;

const RULE_WIDTH: usize = 80;

pub fn generate<W: Write>(analyses: &[AnalysisRecord], generated_at: DateTime<Local>, writer: &mut W) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(writer, "🔥 GitHub Trending Repository Analysis Report")?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(writer)?;

    for (index, analysis) in analyses.iter().enumerate() {
        writeln!(writer)?;
        writeln!(writer, "{rule}")?;
        writeln!(writer, "📊 Repository {}: {}", index + 1, analysis.repository)?;
        writeln!(writer, "{rule}")?;
        writeln!(writer)?;

        write_basic_info(writer, analysis)?;
        write_problem_definition(writer, analysis)?;
        write_architecture(writer, analysis)?;
        write_data_flow(writer, analysis)?;
        write_documentation(writer, analysis)?;
        write_discussions(writer, &analysis.hot_discussions)?;
    }

    writeln!(writer)?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "Report generated by GitHub Trending Analyzer")?;
    writeln!(writer, "{rule}")?;
    Ok(())
}

fn write_basic_info<W: Write>(writer: &mut W, analysis: &AnalysisRecord) -> Result<()> {
    writeln!(writer, "📌 Basic Information")?;
    writeln!(writer, "   ⭐ Stars: {}", format_thousands(analysis.stars))?;
    writeln!(writer, "   🔱 Forks: {}", format_thousands(analysis.forks))?;
    writeln!(writer, "   💬 Language: {}", analysis.language)?;
    writeln!(writer, "   📝 Description: {}", analysis.description)?;
    writeln!(writer, "   📅 Created: {}", analysis.created_at)?;
    writeln!(writer, "   🕒 Updated: {}", analysis.updated_at)?;
    writeln!(writer, "   🔗 URL: {}", analysis.url)?;
    writeln!(writer)?;
    Ok(())
}

fn write_problem_definition<W: Write>(writer: &mut W, analysis: &AnalysisRecord) -> Result<()> {
    let card = &analysis.problem_definition;
    writeln!(writer, "🎯 #1 Problem Definition")?;
    writeln!(writer, "   • Has clear problem statement: {}", check_mark(card.has_problem_statement))?;
    writeln!(writer, "   • README length: {} characters", format_thousands(card.readme_length))?;
    writeln!(writer)?;
    Ok(())
}

fn write_architecture<W: Write>(writer: &mut W, analysis: &AnalysisRecord) -> Result<()> {
    let card = &analysis.architecture_tools;
    writeln!(writer, "🏗️ #2 Architecture & Tools")?;
    writeln!(writer, "   • Primary language: {}", card.primary_language)?;
    if !card.detected_technologies.is_empty() {
        writeln!(writer, "   • Detected technologies: {}", card.detected_technologies.join(", "))?;
    }
    writeln!(writer, "   • Has architecture diagram: {}", check_mark(card.has_architecture_diagram))?;
    writeln!(writer)?;
    Ok(())
}

fn write_data_flow<W: Write>(writer: &mut W, analysis: &AnalysisRecord) -> Result<()> {
    let card = &analysis.data_flow;
    writeln!(writer, "🔄 #3 Data Flow")?;
    writeln!(writer, "   • Mentions API: {}", check_mark(card.mentions_api))?;
    writeln!(writer, "   • Mentions Database: {}", check_mark(card.mentions_database))?;
    writeln!(writer, "   • Mentions Async: {}", check_mark(card.mentions_async))?;
    writeln!(writer, "   • Has flow diagram: {}", check_mark(card.has_flow_diagram))?;
    writeln!(writer)?;
    Ok(())
}

fn write_documentation<W: Write>(writer: &mut W, analysis: &AnalysisRecord) -> Result<()> {
    let card = &analysis.documentation;
    writeln!(writer, "📚 #4 Documentation")?;
    writeln!(writer, "   • Has README: {}", check_mark(card.has_readme))?;
    writeln!(writer, "   • Has installation guide: {}", check_mark(card.has_installation))?;
    writeln!(writer, "   • Has usage examples: {}", check_mark(card.has_usage))?;
    writeln!(writer, "   • Has contributing guide: {}", check_mark(card.has_contributing))?;
    writeln!(writer, "   • Has license: {}", check_mark(card.has_license))?;
    writeln!(writer, "   • Open issues: {}", card.open_issues)?;
    writeln!(writer)?;
    Ok(())
}

fn write_discussions<W: Write>(writer: &mut W, discussions: &[DiscussionSummary]) -> Result<()> {
    if discussions.is_empty() {
        return Ok(());
    }

    writeln!(writer, "💬 Hot Discussions")?;
    for (index, discussion) in discussions.iter().enumerate() {
        writeln!(writer, "   {}. {}", index + 1, discussion.title)?;
        write!(
            writer,
            "      • Issue #{} | {} comments | {}",
            discussion.number, discussion.comments, discussion.state
        )?;
        if discussion.created_at.is_empty() {
            writeln!(writer)?;
        } else {
            writeln!(writer, " | opened {}", discussion.created_at)?;
        }
        writeln!(writer, "      • {}", discussion.url)?;
    }
    writeln!(writer)?;
    Ok(())
}
