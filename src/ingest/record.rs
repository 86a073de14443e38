// src/ingest/record.rs

use serde::Deserialize;

use crate::dag::LineageRecord;
use crate::errors::Result;

/// One lineage line as emitted by the governance exporter.
///
/// ```json
/// {
///   "name": "ingest-orders",
///   "declaredLineage": {"inputs": ["/raw/orders"], "outputs": ["/clean/orders"]},
///   "dataLineage": {"inputs": [], "outputs": []}
/// }
/// ```
///
/// Declared lineage is what the workflow claims; data lineage is what was
/// observed at run time. Both halves count, so they are concatenated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineageLine {
    pub name: String,
    #[serde(default)]
    pub declared_lineage: LineageHalf,
    #[serde(default)]
    pub data_lineage: LineageHalf,
}

/// The `inputs`/`outputs` pair carried by each lineage half.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineageHalf {
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl RawLineageLine {
    /// Collapse the declared and observed halves into one record.
    pub fn into_record(self) -> LineageRecord {
        let mut inputs = self.declared_lineage.inputs;
        inputs.extend(self.data_lineage.inputs);

        let mut outputs = self.declared_lineage.outputs;
        outputs.extend(self.data_lineage.outputs);

        LineageRecord::new(self.name, inputs, outputs)
    }
}

/// Parse one JSON line into a lineage record.
pub fn parse_line(line: &str) -> Result<LineageRecord> {
    let raw: RawLineageLine = serde_json::from_str(line)?;
    Ok(raw.into_record())
}
