use crate::Result;
use crate::analysis::AnalysisRecord;
use core::fmt::Write;

pub fn generate<W: Write>(analyses: &[AnalysisRecord], writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_json::to_string_pretty(analyses)?)?;
    Ok(())
}
