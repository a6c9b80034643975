//! This module provides the Model struct for representing an entire metabolic model

use crate::metabolic_model::gene::Gene;
use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::reaction::Reaction;

use indexmap::IndexMap;
use thiserror::Error;

/// Represents a Genome Scale Metabolic Model
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    /// Map of reaction ids to Reaction objects
    pub reactions: IndexMap<String, Reaction>,
    /// Map of gene ids to Gene objects
    pub genes: IndexMap<String, Gene>,
    /// Map of metabolite ids to Metabolite objects
    pub metabolites: IndexMap<String, Metabolite>,
    /// Id associated with the Model
    pub id: Option<String>,
    /// Compartments in the model
    ///
    /// An IndexMap<String, String> of {short name: long name}
    pub compartments: Option<IndexMap<String, String>>,
    /// A version identifier for the Model, stored as a string
    pub version: Option<String>,
}

impl Model {
    pub fn new_empty() -> Self {
        Model::default()
    }

    /// Add a reaction to the model
    ///
    /// # Examples
    /// ```rust
    /// use pathslice_core::metabolic_model::model::Model;
    /// use pathslice_core::metabolic_model::reaction::ReactionBuilder;
    /// let mut model = Model::new_empty();
    /// let new_reaction = ReactionBuilder::default().id("new_reaction".to_string()).build().unwrap();
    /// model.add_reaction(new_reaction);
    /// ```
    pub fn add_reaction(&mut self, reaction: Reaction) {
        let id = reaction.id.clone();
        self.reactions.insert(id, reaction);
    }

    /// Add a metabolite to the model
    ///
    /// # Examples
    /// ```rust
    /// use pathslice_core::metabolic_model::metabolite::MetaboliteBuilder;
    /// use pathslice_core::metabolic_model::model::Model;
    /// let mut model = Model::new_empty();
    /// let new_metabolite = MetaboliteBuilder::default().id("new_metabolite".to_string()).build().unwrap();
    /// model.add_metabolite(new_metabolite);
    /// ```
    pub fn add_metabolite(&mut self, metabolite: Metabolite) {
        let id = metabolite.id.clone();
        self.metabolites.insert(id, metabolite);
    }

    /// Add a gene to the model
    ///
    /// # Examples
    /// ```rust
    /// use pathslice_core::metabolic_model::gene::GeneBuilder;
    /// use pathslice_core::metabolic_model::model::Model;
    /// let mut model = Model::new_empty();
    /// let new_gene = GeneBuilder::default().id("new_gene".to_string()).build().unwrap();
    /// model.add_gene(new_gene);
    /// ```
    pub fn add_gene(&mut self, gene: Gene) {
        let id = gene.id.clone();
        self.genes.insert(id, gene);
    }
}

// region Query Interface
/// Error raised when an id can't be resolved against the model
///
/// The two variants are deliberately distinct so callers can tell a missing
/// reaction apart from a reaction whose stoichiometry references a metabolite
/// the model never declared.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelQueryError {
    #[error("reaction {0} is not present in the model")]
    ReactionNotFound(String),
    #[error("metabolite {0} is not present in the model")]
    MetaboliteNotFound(String),
}

// Read-only lookups, the only surface the extraction layer consumes
impl Model {
    /// Resolve a reaction by its id
    pub fn reaction_by_id(&self, id: &str) -> Result<&Reaction, ModelQueryError> {
        self.reactions
            .get(id)
            .ok_or_else(|| ModelQueryError::ReactionNotFound(id.to_string()))
    }

    /// Resolve a metabolite by its id
    pub fn metabolite_by_id(&self, id: &str) -> Result<&Metabolite, ModelQueryError> {
        self.metabolites
            .get(id)
            .ok_or_else(|| ModelQueryError::MetaboliteNotFound(id.to_string()))
    }
}
// endregion Query Interface

#[cfg(test)]
mod query_tests {
    use super::*;
    use crate::metabolic_model::metabolite::MetaboliteBuilder;
    use crate::metabolic_model::reaction::ReactionBuilder;

    fn setup_model() -> Model {
        let mut model = Model::new_empty();
        let histd = ReactionBuilder::default()
            .id("HISTD".to_string())
            .name(Some("Histidinol dehydrogenase".to_string()))
            .lower_bound(0.0)
            .build()
            .unwrap();
        model.add_reaction(histd);
        let histidinol = MetaboliteBuilder::default()
            .id("histd_c".to_string())
            .name(Some("L-Histidinol".to_string()))
            .compartment(Some("c".to_string()))
            .charge(1)
            .build()
            .unwrap();
        model.add_metabolite(histidinol);
        model
    }

    #[test]
    fn reaction_lookup() {
        let model = setup_model();
        let reaction = model.reaction_by_id("HISTD").unwrap();
        assert_eq!(reaction.id, "HISTD");
        assert_eq!(reaction.name.clone().unwrap(), "Histidinol dehydrogenase");
    }

    #[test]
    fn reaction_lookup_missing() {
        let model = setup_model();
        let err = model.reaction_by_id("PFK").unwrap_err();
        assert_eq!(err, ModelQueryError::ReactionNotFound("PFK".to_string()));
        assert_eq!(
            format!("{}", err),
            "reaction PFK is not present in the model"
        );
    }

    #[test]
    fn metabolite_lookup() {
        let model = setup_model();
        let metabolite = model.metabolite_by_id("histd_c").unwrap();
        assert_eq!(metabolite.id, "histd_c");
        assert_eq!(metabolite.charge, 1);
        assert_eq!(metabolite.compartment.clone().unwrap(), "c");
    }

    #[test]
    fn metabolite_lookup_missing() {
        let model = setup_model();
        let err = model.metabolite_by_id("glc__D_e").unwrap_err();
        assert_eq!(
            err,
            ModelQueryError::MetaboliteNotFound("glc__D_e".to_string())
        );
        assert_eq!(
            format!("{}", err),
            "metabolite glc__D_e is not present in the model"
        );
    }
}
