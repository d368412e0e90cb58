//! Human-readable key/value output.

use coherence_core::{
    BatchSummary, CouplingParameters, EntityParameters, EvaluationResult, ForceResult, Scenario,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub name: &'static str,
    pub entity_a: EntityParameters,
    pub entity_b: EntityParameters,
    pub coupling: CouplingParameters,
    pub result: EvaluationResult,
}

impl ScenarioReport {
    pub fn new(scenario: &Scenario, result: EvaluationResult) -> Self {
        Self {
            name: scenario.name,
            entity_a: scenario.entity_a,
            entity_b: scenario.entity_b,
            coupling: scenario.coupling,
            result,
        }
    }
}

pub fn print_inputs(a: &EntityParameters, b: &EntityParameters, coupling: &CouplingParameters) {
    println!("entity_a:         magnitude={} angle={}°", a.magnitude, a.angle);
    println!("entity_b:         magnitude={} angle={}°", b.magnitude, b.angle);
    println!("friction:         {}", coupling.friction);
}

pub fn print_result(result: &EvaluationResult, precision: u32) {
    let p = precision as usize;
    println!("sync_factor:      {:.p$}", result.sync_factor);
    println!("total_output:     {:.p$}", result.total_output);
    println!("composite_score:  {:.p$}", result.composite_score);
    println!(
        "classification:   {} ({})",
        result.classification,
        result.classification.source_label()
    );
}

pub fn print_force(result: &ForceResult, precision: u32) {
    let p = precision as usize;
    println!("force:            {:.p$}", result.force);
    println!("magnitude:        {:.p$}", result.components.magnitude);
    println!("alignment:        {:.p$}", result.components.alignment);
    println!("selection_gate:   {:.p$}", result.components.selection_gate);
    println!("r_effective:      {:.p$}", result.components.r_effective);
    println!("band:             {}", result.band);
}

pub fn print_summary(summary: &BatchSummary, precision: u32) {
    let p = precision as usize;
    println!("evaluated:        {}", summary.evaluated);
    println!("rejected:         {}", summary.rejected);
    println!("high_coherence:   {}", summary.high_coherence);
    println!("high_friction:    {}", summary.high_friction);
    println!("mean_composite:   {:.p$}", summary.mean_composite);
    println!("max_composite:    {:.p$}", summary.max_composite);
}
