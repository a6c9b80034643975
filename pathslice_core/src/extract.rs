//! Module providing extraction of pathway slices from a Model
//!
//! A slice is built from a fixed, ordered list of reaction ids: each reaction
//! is flattened into a [`ReactionInfo`] record, and every metabolite that
//! appears in any of the collected stoichiometries is then resolved into a
//! [`MetaboliteInfo`] record. The metabolite set is purely derived, it is
//! never specified independently of the reactions.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metabolic_model::model::{Model, ModelQueryError};

/// Flattened record of a single reaction
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReactionInfo {
    /// Map of metabolite id to signed stoichiometric coefficient
    pub stoichiometry: IndexMap<String, f64>,
    /// Upper flux bound
    pub upper_bound: f64,
    /// Lower flux bound
    pub lower_bound: f64,
    /// Human-readable reaction name, empty when the model has none
    pub name: String,
}

/// Flattened record of a single metabolite
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MetaboliteInfo {
    /// Human-readable metabolite name, empty when the model has none
    pub name: String,
    /// Chemical formula, empty when the model has none
    pub formula: String,
    /// Net electrical charge
    pub charge: i32,
    /// Short code of the compartment the metabolite belongs to
    pub compartment: String,
}

/// The two output mappings of an extraction run
///
/// Reactions appear in the order of the id list the slice was requested with,
/// metabolites in first-seen order across the collected stoichiometries.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PathwaySummary {
    /// Map of reaction id to its flattened record
    pub reactions: IndexMap<String, ReactionInfo>,
    /// Map of metabolite id to its flattened record
    pub metabolites: IndexMap<String, MetaboliteInfo>,
}

impl PathwaySummary {
    /// Serialize the summary to a pretty-printed JSON string
    pub fn to_json_string(&self) -> Result<String, SummaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the summary to a JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), SummaryError> {
        let summary_string = self.to_json_string()?;
        fs::write(path, summary_string)?;
        Ok(())
    }

    /// Read a previously written summary back from a JSON file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<PathwaySummary, SummaryError> {
        let summary_string = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&summary_string)?)
    }
}

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Unable to serialize summary")]
    Serialize(#[from] serde_json::Error),
    #[error("Unable to access summary file")]
    Io(#[from] std::io::Error),
}

/// Extract a pathway slice from a model
///
/// Resolves every id in `reaction_ids` against the model, records each
/// reaction's stoichiometry, bounds, and name, then resolves every metabolite
/// referenced by any of those stoichiometries and records its name, formula,
/// charge, and compartment.
///
/// Any id that can't be resolved is fatal: the corresponding
/// [`ModelQueryError`] is propagated unmodified and no partial summary is
/// returned. A [`ModelQueryError::MetaboliteNotFound`] means a collected
/// reaction references a metabolite the model never declared.
///
/// # Examples
/// ```rust
/// use indexmap::IndexMap;
/// use pathslice_core::extract::extract_pathway;
/// use pathslice_core::metabolic_model::metabolite::MetaboliteBuilder;
/// use pathslice_core::metabolic_model::model::Model;
/// use pathslice_core::metabolic_model::reaction::ReactionBuilder;
///
/// let mut model = Model::new_empty();
/// let mut stoichiometry = IndexMap::new();
/// stoichiometry.insert("A".to_string(), -1.0);
/// stoichiometry.insert("B".to_string(), 1.0);
/// let reaction = ReactionBuilder::default()
///     .id("R1".to_string())
///     .metabolites(stoichiometry)
///     .build()
///     .unwrap();
/// model.add_reaction(reaction);
/// for id in ["A", "B"] {
///     let metabolite = MetaboliteBuilder::default().id(id.to_string()).build().unwrap();
///     model.add_metabolite(metabolite);
/// }
///
/// let summary = extract_pathway(&model, &["R1"]).unwrap();
/// assert_eq!(summary.reactions.len(), 1);
/// assert_eq!(summary.metabolites.len(), 2);
/// ```
pub fn extract_pathway(
    model: &Model,
    reaction_ids: &[&str],
) -> Result<PathwaySummary, ModelQueryError> {
    let mut reactions: IndexMap<String, ReactionInfo> = IndexMap::new();
    for &reaction_id in reaction_ids {
        let reaction = model.reaction_by_id(reaction_id)?;
        reactions.insert(
            reaction_id.to_string(),
            ReactionInfo {
                stoichiometry: reaction.metabolites.clone(),
                upper_bound: reaction.upper_bound,
                lower_bound: reaction.lower_bound,
                name: reaction.name.clone().unwrap_or_default(),
            },
        );
    }

    // Second pass over the union of stoichiometry keys, in first-seen order
    let mut metabolites: IndexMap<String, MetaboliteInfo> = IndexMap::new();
    for info in reactions.values() {
        for metabolite_id in info.stoichiometry.keys() {
            if metabolites.contains_key(metabolite_id) {
                continue;
            }
            let metabolite = model.metabolite_by_id(metabolite_id)?;
            metabolites.insert(
                metabolite_id.clone(),
                MetaboliteInfo {
                    name: metabolite.name.clone().unwrap_or_default(),
                    formula: metabolite.formula.clone().unwrap_or_default(),
                    charge: metabolite.charge,
                    compartment: metabolite.compartment.clone().unwrap_or_default(),
                },
            );
        }
    }

    Ok(PathwaySummary {
        reactions,
        metabolites,
    })
}

#[cfg(test)]
mod extract_tests {
    use super::*;
    use crate::metabolic_model::metabolite::MetaboliteBuilder;
    use crate::metabolic_model::reaction::ReactionBuilder;

    /// Two reactions sharing metabolite B: A -> B -> C
    fn setup_model() -> Model {
        let mut model = Model::new_empty();

        let mut stoichiometry = IndexMap::new();
        stoichiometry.insert("A".to_string(), -1.0);
        stoichiometry.insert("B".to_string(), 1.0);
        let r1 = ReactionBuilder::default()
            .id("R1".to_string())
            .metabolites(stoichiometry)
            .name(Some("A to B".to_string()))
            .lower_bound(0.0)
            .upper_bound(1000.0)
            .build()
            .unwrap();
        model.add_reaction(r1);

        let mut stoichiometry = IndexMap::new();
        stoichiometry.insert("B".to_string(), -1.0);
        stoichiometry.insert("C".to_string(), 1.0);
        let r2 = ReactionBuilder::default()
            .id("R2".to_string())
            .metabolites(stoichiometry)
            .name(Some("B to C".to_string()))
            .lower_bound(-1000.0)
            .upper_bound(1000.0)
            .build()
            .unwrap();
        model.add_reaction(r2);

        for (id, name, formula, charge) in [
            ("A", "Metabolite A", "C6H12O6", 0),
            ("B", "Metabolite B", "C6H11O6", -1),
            ("C", "Metabolite C", "C6H10O6", -2),
        ] {
            let metabolite = MetaboliteBuilder::default()
                .id(id.to_string())
                .name(Some(name.to_string()))
                .formula(Some(formula.to_string()))
                .charge(charge)
                .compartment(Some("c".to_string()))
                .build()
                .unwrap();
            model.add_metabolite(metabolite);
        }
        model
    }

    #[test]
    fn one_record_per_reaction() {
        let model = setup_model();
        let summary = extract_pathway(&model, &["R1", "R2"]).unwrap();
        assert_eq!(summary.reactions.len(), 2);
        let r1 = summary.reactions.get("R1").unwrap();
        assert!(!r1.stoichiometry.is_empty());
        assert_eq!(r1.name, "A to B");
        assert!((r1.lower_bound - 0.0).abs() < 1e-25);
        assert!((r1.upper_bound - 1000.0).abs() < 1e-25);
        assert!((r1.stoichiometry.get("A").unwrap() - -1.0).abs() < 1e-25);
        assert!((r1.stoichiometry.get("B").unwrap() - 1.0).abs() < 1e-25);
    }

    #[test]
    fn reaction_order_follows_request() {
        let model = setup_model();
        let summary = extract_pathway(&model, &["R2", "R1"]).unwrap();
        let ids: Vec<&String> = summary.reactions.keys().collect();
        assert_eq!(ids, vec!["R2", "R1"]);
    }

    #[test]
    fn metabolite_closure() {
        let model = setup_model();
        let summary = extract_pathway(&model, &["R1"]).unwrap();
        // Exactly the metabolites referenced by R1, nothing else from the model
        let ids: Vec<&String> = summary.metabolites.keys().collect();
        assert_eq!(ids, vec!["A", "B"]);

        // And the closure holds over several reactions with a shared metabolite
        let summary = extract_pathway(&model, &["R1", "R2"]).unwrap();
        let ids: Vec<&String> = summary.metabolites.keys().collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        for info in summary.reactions.values() {
            for metabolite_id in info.stoichiometry.keys() {
                assert!(summary.metabolites.contains_key(metabolite_id));
            }
        }
    }

    #[test]
    fn metabolite_fields_copied() {
        let model = setup_model();
        let summary = extract_pathway(&model, &["R1"]).unwrap();
        let b = summary.metabolites.get("B").unwrap();
        assert_eq!(b.name, "Metabolite B");
        assert_eq!(b.formula, "C6H11O6");
        assert_eq!(b.charge, -1);
        assert_eq!(b.compartment, "c");
    }

    #[test]
    fn missing_reaction_is_fatal() {
        let model = setup_model();
        let err = extract_pathway(&model, &["R1", "R9"]).unwrap_err();
        assert_eq!(err, ModelQueryError::ReactionNotFound("R9".to_string()));
    }

    #[test]
    fn missing_metabolite_is_fatal() {
        let mut model = setup_model();
        let mut stoichiometry = IndexMap::new();
        stoichiometry.insert("C".to_string(), -1.0);
        stoichiometry.insert("ghost".to_string(), 1.0);
        let r3 = ReactionBuilder::default()
            .id("R3".to_string())
            .metabolites(stoichiometry)
            .build()
            .unwrap();
        model.add_reaction(r3);

        let err = extract_pathway(&model, &["R3"]).unwrap_err();
        assert_eq!(
            err,
            ModelQueryError::MetaboliteNotFound("ghost".to_string())
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let model = setup_model();
        let first = extract_pathway(&model, &["R1", "R2"]).unwrap();
        let second = extract_pathway(&model, &["R1", "R2"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_request_gives_empty_summary() {
        let model = setup_model();
        let summary = extract_pathway(&model, &[]).unwrap();
        assert!(summary.reactions.is_empty());
        assert!(summary.metabolites.is_empty());
    }

    #[test]
    fn unnamed_fields_default_to_empty() {
        let mut model = Model::new_empty();
        let mut stoichiometry = IndexMap::new();
        stoichiometry.insert("X".to_string(), 1.0);
        let reaction = ReactionBuilder::default()
            .id("R1".to_string())
            .metabolites(stoichiometry)
            .build()
            .unwrap();
        model.add_reaction(reaction);
        let metabolite = MetaboliteBuilder::default().id("X".to_string()).build().unwrap();
        model.add_metabolite(metabolite);

        let summary = extract_pathway(&model, &["R1"]).unwrap();
        assert_eq!(summary.reactions.get("R1").unwrap().name, "");
        let x = summary.metabolites.get("X").unwrap();
        assert_eq!(x.name, "");
        assert_eq!(x.formula, "");
        assert_eq!(x.compartment, "");
        assert_eq!(x.charge, 0);
    }

    #[test]
    fn summary_serialization_round_trip() {
        let model = setup_model();
        let summary = extract_pathway(&model, &["R1", "R2"]).unwrap();
        let serialized = summary.to_json_string().unwrap();
        let reparsed: PathwaySummary = serde_json::from_str(&serialized).unwrap();
        assert_eq!(summary, reparsed);
    }

    #[test]
    fn summary_file_round_trip() {
        let model = setup_model();
        let summary = extract_pathway(&model, &["R1", "R2"]).unwrap();
        let path = std::env::temp_dir().join("pathslice_summary_round_trip.json");
        summary.write_json(&path).unwrap();
        let reread = PathwaySummary::read_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(summary, reread);
    }
}
