use jsonnlp_canonical::{FieldKind, FieldSet, FieldValue, TypedRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The twelve admissible keys of a semantic triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripleField {
    /// `clauseID` (int).
    ClauseId,
    /// `fromEntity` (int).
    FromEntity,
    /// `toEntity` (int).
    ToEntity,
    /// `rel` (int).
    Rel,
    /// `sentenceID` (int).
    SentenceId,
    /// `directional` (bool).
    Directional,
    /// `eventID` (int).
    EventId,
    /// `tempSeq` (int).
    TempSeq,
    /// `prob` (float).
    Prob,
    /// `syntactic` (bool).
    Syntactic,
    /// `implied` (bool).
    Implied,
    /// `presupposed` (bool).
    Presupposed,
}

impl FieldSet for TripleField {
    const FIELDS: &'static [Self] = &[
        TripleField::ClauseId,
        TripleField::FromEntity,
        TripleField::ToEntity,
        TripleField::Rel,
        TripleField::SentenceId,
        TripleField::Directional,
        TripleField::EventId,
        TripleField::TempSeq,
        TripleField::Prob,
        TripleField::Syntactic,
        TripleField::Implied,
        TripleField::Presupposed,
    ];

    fn name(self) -> &'static str {
        match self {
            TripleField::ClauseId => "clauseID",
            TripleField::FromEntity => "fromEntity",
            TripleField::ToEntity => "toEntity",
            TripleField::Rel => "rel",
            TripleField::SentenceId => "sentenceID",
            TripleField::Directional => "directional",
            TripleField::EventId => "eventID",
            TripleField::TempSeq => "tempSeq",
            TripleField::Prob => "prob",
            TripleField::Syntactic => "syntactic",
            TripleField::Implied => "implied",
            TripleField::Presupposed => "presupposed",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            TripleField::Directional
            | TripleField::Syntactic
            | TripleField::Implied
            | TripleField::Presupposed => FieldKind::Bool,
            TripleField::Prob => FieldKind::Float,
            _ => FieldKind::Int,
        }
    }
}

/// Semantic triple: `fromEntity --rel--> toEntity` within a clause.
///
/// Backed by a [`TypedRecord`], so string-keyed writes through
/// [`Triple::set`] are silently dropped when the key is not one of the
/// twelve triple keys or the value has the wrong kind. Boolean provenance
/// flags are either `true` or unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triple(TypedRecord<TripleField>);

impl Triple {
    /// Creates a triple with its four identifying keys set.
    pub fn new(clause_id: i64, from_entity: i64, to_entity: i64, rel: i64) -> Self {
        let mut triple = Self::default();
        triple.set_int(TripleField::ClauseId, clause_id);
        triple.set_int(TripleField::FromEntity, from_entity);
        triple.set_int(TripleField::ToEntity, to_entity);
        triple.set_int(TripleField::Rel, rel);
        triple
    }

    /// Writes a value by key; see [`TypedRecord::set`].
    pub fn set(&mut self, key: &str, value: Option<FieldValue>) -> bool {
        self.0.set(key, value)
    }

    /// Reads a value by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// The underlying record.
    pub fn record(&self) -> &TypedRecord<TripleField> {
        &self.0
    }

    /// Set keys as a JSON object, in declared order.
    pub fn export(&self) -> Map<String, Value> {
        self.0.export()
    }

    fn set_int(&mut self, field: TripleField, value: i64) {
        self.0.set_field(field, Some(FieldValue::Int(value)));
    }

    fn int(&self, field: TripleField) -> Option<i64> {
        self.0.get_field(field).and_then(FieldValue::as_int)
    }

    fn flag(&self, field: TripleField) -> Option<bool> {
        self.0.get_field(field).and_then(FieldValue::as_bool)
    }

    fn mark(&mut self, field: TripleField, on: bool) {
        self.0.set_field(field, on.then_some(FieldValue::Bool(true)));
    }

    /// Clause the triple was extracted from.
    pub fn clause_id(&self) -> Option<i64> {
        self.int(TripleField::ClauseId)
    }

    /// Sets the clause id.
    pub fn set_clause_id(&mut self, id: i64) {
        self.set_int(TripleField::ClauseId, id);
    }

    /// Source entity.
    pub fn from_entity(&self) -> Option<i64> {
        self.int(TripleField::FromEntity)
    }

    /// Sets the source entity.
    pub fn set_from_entity(&mut self, id: i64) {
        self.set_int(TripleField::FromEntity, id);
    }

    /// Target entity.
    pub fn to_entity(&self) -> Option<i64> {
        self.int(TripleField::ToEntity)
    }

    /// Sets the target entity.
    pub fn set_to_entity(&mut self, id: i64) {
        self.set_int(TripleField::ToEntity, id);
    }

    /// Relation id.
    pub fn rel(&self) -> Option<i64> {
        self.int(TripleField::Rel)
    }

    /// Sets the relation id.
    pub fn set_rel(&mut self, id: i64) {
        self.set_int(TripleField::Rel, id);
    }

    /// Sentence the triple was extracted from.
    pub fn sentence_id(&self) -> Option<i64> {
        self.int(TripleField::SentenceId)
    }

    /// Sets the sentence id.
    pub fn set_sentence_id(&mut self, id: i64) {
        self.set_int(TripleField::SentenceId, id);
    }

    /// Event the triple belongs to.
    pub fn event_id(&self) -> Option<i64> {
        self.int(TripleField::EventId)
    }

    /// Sets the event id.
    pub fn set_event_id(&mut self, id: i64) {
        self.set_int(TripleField::EventId, id);
    }

    /// Position in the temporal sequence of events.
    pub fn temp_seq(&self) -> Option<i64> {
        self.int(TripleField::TempSeq)
    }

    /// Sets the temporal sequence number.
    pub fn set_temp_seq(&mut self, seq: i64) {
        self.set_int(TripleField::TempSeq, seq);
    }

    /// Confidence.
    pub fn prob(&self) -> Option<f64> {
        self.0.get_field(TripleField::Prob).and_then(FieldValue::as_float)
    }

    /// Sets the confidence.
    pub fn set_prob(&mut self, prob: f64) {
        self.0.set_field(TripleField::Prob, Some(FieldValue::Float(prob)));
    }

    /// Whether the relation is directional.
    pub fn directional(&self) -> Option<bool> {
        self.flag(TripleField::Directional)
    }

    /// Marks the relation directional.
    pub fn set_directional(&mut self) {
        self.mark(TripleField::Directional, true);
    }

    /// Clears the directional mark.
    pub fn unset_directional(&mut self) {
        self.mark(TripleField::Directional, false);
    }

    /// Whether the triple comes from surface syntax.
    pub fn syntactic(&self) -> Option<bool> {
        self.flag(TripleField::Syntactic)
    }

    /// Marks the triple syntactic.
    pub fn set_syntactic(&mut self) {
        self.mark(TripleField::Syntactic, true);
    }

    /// Clears the syntactic mark.
    pub fn unset_syntactic(&mut self) {
        self.mark(TripleField::Syntactic, false);
    }

    /// Whether the triple is implied.
    pub fn implied(&self) -> Option<bool> {
        self.flag(TripleField::Implied)
    }

    /// Marks the triple implied.
    pub fn set_implied(&mut self) {
        self.mark(TripleField::Implied, true);
    }

    /// Clears the implied mark.
    pub fn unset_implied(&mut self) {
        self.mark(TripleField::Implied, false);
    }

    /// Whether the triple is presupposed.
    pub fn presupposed(&self) -> Option<bool> {
        self.flag(TripleField::Presupposed)
    }

    /// Marks the triple presupposed.
    pub fn set_presupposed(&mut self) {
        self.mark(TripleField::Presupposed, true);
    }

    /// Clears the presupposed mark.
    pub fn unset_presupposed(&mut self) {
        self.mark(TripleField::Presupposed, false);
    }
}
