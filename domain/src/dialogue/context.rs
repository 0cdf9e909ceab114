//! Dialogue context entity
//!
//! [`DialogueContext`] accumulates what the analyst has told us about the
//! investigation. It is owned by exactly one dialogue and only changes through
//! explicit setters or by merging a [`ContextUpdate`] extracted from an answer.

use crate::core::error::DomainError;
use crate::dialogue::perspective::Perspective;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Named fields of a [`DialogueContext`] that clarifying questions can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextField {
    Scope,
    Timeframe,
    TargetEntities,
    ThreatActors,
    PriorityFocus,
    Perspectives,
}

impl ContextField {
    /// Fields that must be set before a PIR can be generated
    pub const REQUIRED: [ContextField; 3] = [
        ContextField::Scope,
        ContextField::Timeframe,
        ContextField::TargetEntities,
    ];

    /// Order in which unset fields should be asked about
    pub const QUESTION_PRIORITY: [ContextField; 6] = [
        ContextField::Scope,
        ContextField::TargetEntities,
        ContextField::ThreatActors,
        ContextField::Timeframe,
        ContextField::PriorityFocus,
        ContextField::Perspectives,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextField::Scope => "scope",
            ContextField::Timeframe => "timeframe",
            ContextField::TargetEntities => "target_entities",
            ContextField::ThreatActors => "threat_actors",
            ContextField::PriorityFocus => "priority_focus",
            ContextField::Perspectives => "perspectives",
        }
    }

    /// Position of this field in [`Self::QUESTION_PRIORITY`]
    pub fn question_rank(&self) -> usize {
        Self::QUESTION_PRIORITY
            .iter()
            .position(|f| f == self)
            .unwrap_or(Self::QUESTION_PRIORITY.len())
    }

    /// Sort fields so the one to ask about first comes first
    pub fn sort_by_question_priority(fields: &mut [ContextField]) {
        fields.sort_by_key(|f| f.question_rank());
    }
}

impl fmt::Display for ContextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Context values extracted from one user answer (Value Object).
///
/// Every field is optional: an update only carries what the answer revealed.
/// Blank strings and empty lists are treated as "not mentioned" and never
/// erase a value that was already gathered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextUpdate {
    pub scope: Option<String>,
    pub timeframe: Option<String>,
    pub target_entities: Option<Vec<String>>,
    pub threat_actors: Option<Vec<String>>,
    pub priority_focus: Option<String>,
}

impl ContextUpdate {
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = Some(timeframe.into());
        self
    }

    pub fn with_target_entities<S: Into<String>>(
        mut self,
        entities: impl IntoIterator<Item = S>,
    ) -> Self {
        self.target_entities = Some(entities.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_threat_actors<S: Into<String>>(
        mut self,
        actors: impl IntoIterator<Item = S>,
    ) -> Self {
        self.threat_actors = Some(actors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_priority_focus(mut self, focus: impl Into<String>) -> Self {
        self.priority_focus = Some(focus.into());
        self
    }

    /// Fields this update would actually change when merged
    pub fn fields(&self) -> Vec<ContextField> {
        let mut fields = Vec::new();
        if has_text(&self.scope) {
            fields.push(ContextField::Scope);
        }
        if has_text(&self.timeframe) {
            fields.push(ContextField::Timeframe);
        }
        if has_items(&self.target_entities) {
            fields.push(ContextField::TargetEntities);
        }
        if has_items(&self.threat_actors) {
            fields.push(ContextField::ThreatActors);
        }
        if has_text(&self.priority_focus) {
            fields.push(ContextField::PriorityFocus);
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn has_items(value: &Option<Vec<String>>) -> bool {
    value
        .as_deref()
        .is_some_and(|items| items.iter().any(|s| !s.trim().is_empty()))
}

fn clean_items(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Accumulated investigation requirements for one dialogue (Entity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueContext {
    #[serde(serialize_with = "serialize_query")]
    initial_query: Option<String>,
    scope: String,
    timeframe: String,
    target_entities: Vec<String>,
    threat_actors: Vec<String>,
    priority_focus: String,
    perspectives: Vec<Perspective>,
    modifications: Option<String>,
}

fn serialize_query<S: Serializer>(query: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(query.as_deref().unwrap_or(""))
}

impl Default for DialogueContext {
    fn default() -> Self {
        Self {
            initial_query: None,
            scope: String::new(),
            timeframe: String::new(),
            target_entities: Vec::new(),
            threat_actors: Vec::new(),
            priority_focus: String::new(),
            perspectives: vec![Perspective::Neutral],
            modifications: None,
        }
    }
}

impl DialogueContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    /// The first message of the dialogue, or `""` before it arrives
    pub fn initial_query(&self) -> &str {
        self.initial_query.as_deref().unwrap_or("")
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn timeframe(&self) -> &str {
        &self.timeframe
    }

    pub fn target_entities(&self) -> &[String] {
        &self.target_entities
    }

    pub fn threat_actors(&self) -> &[String] {
        &self.threat_actors
    }

    pub fn priority_focus(&self) -> &str {
        &self.priority_focus
    }

    pub fn perspectives(&self) -> &[Perspective] {
        &self.perspectives
    }

    pub fn modifications(&self) -> Option<&str> {
        self.modifications.as_deref()
    }

    // ==================== Mutators ====================

    /// Record the initial query. Only the first call has any effect.
    ///
    /// Returns `true` if the query was stored.
    pub fn set_initial_query(&mut self, query: impl Into<String>) -> bool {
        if self.initial_query.is_some() {
            return false;
        }
        self.initial_query = Some(query.into());
        true
    }

    /// Overwrite the initial query, e.g. when a failed first turn is resent
    pub fn replace_initial_query(&mut self, query: impl Into<String>) {
        self.initial_query = Some(query.into());
    }

    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
    }

    pub fn set_timeframe(&mut self, timeframe: impl Into<String>) {
        self.timeframe = timeframe.into();
    }

    pub fn set_target_entities<S: Into<String>>(&mut self, entities: impl IntoIterator<Item = S>) {
        self.target_entities = entities.into_iter().map(Into::into).collect();
    }

    pub fn set_threat_actors<S: Into<String>>(&mut self, actors: impl IntoIterator<Item = S>) {
        self.threat_actors = actors.into_iter().map(Into::into).collect();
    }

    pub fn set_priority_focus(&mut self, focus: impl Into<String>) {
        self.priority_focus = focus.into();
    }

    /// Replace the selected perspectives. An empty selection resets to neutral.
    pub fn set_perspectives(&mut self, perspectives: Vec<Perspective>) {
        let mut deduped: Vec<Perspective> = Vec::with_capacity(perspectives.len());
        for p in perspectives {
            if !deduped.contains(&p) {
                deduped.push(p);
            }
        }
        if deduped.is_empty() {
            deduped.push(Perspective::Neutral);
        }
        self.perspectives = deduped;
    }

    /// Store the analyst's latest rejection feedback, replacing any earlier one
    pub fn set_modifications(&mut self, feedback: impl Into<String>) {
        self.modifications = Some(feedback.into());
    }

    pub fn clear_modifications(&mut self) {
        self.modifications = None;
    }

    /// Merge values extracted from an answer.
    ///
    /// Returns the fields that changed.
    pub fn apply(&mut self, update: ContextUpdate) -> Vec<ContextField> {
        let changed = update.fields();
        let ContextUpdate {
            scope,
            timeframe,
            target_entities,
            threat_actors,
            priority_focus,
        } = update;

        if let Some(scope) = scope.filter(|s| !s.trim().is_empty()) {
            self.scope = scope.trim().to_string();
        }
        if let Some(timeframe) = timeframe.filter(|s| !s.trim().is_empty()) {
            self.timeframe = timeframe.trim().to_string();
        }
        if let Some(entities) = target_entities.map(clean_items).filter(|v| !v.is_empty()) {
            self.target_entities = entities;
        }
        if let Some(actors) = threat_actors.map(clean_items).filter(|v| !v.is_empty()) {
            self.threat_actors = actors;
        }
        if let Some(focus) = priority_focus.filter(|s| !s.trim().is_empty()) {
            self.priority_focus = focus.trim().to_string();
        }

        changed
    }

    // ==================== Queries ====================

    /// Whether a field currently holds a value
    pub fn is_set(&self, field: ContextField) -> bool {
        match field {
            ContextField::Scope => !self.scope.is_empty(),
            ContextField::Timeframe => !self.timeframe.is_empty(),
            ContextField::TargetEntities => !self.target_entities.is_empty(),
            ContextField::ThreatActors => !self.threat_actors.is_empty(),
            ContextField::PriorityFocus => !self.priority_focus.is_empty(),
            ContextField::Perspectives => !self.perspectives.is_empty(),
        }
    }

    /// Unset fields among scope, timeframe, target_entities, threat_actors
    /// and priority_focus, in that order
    pub fn missing_fields(&self) -> Vec<ContextField> {
        [
            ContextField::Scope,
            ContextField::Timeframe,
            ContextField::TargetEntities,
            ContextField::ThreatActors,
            ContextField::PriorityFocus,
        ]
        .into_iter()
        .filter(|f| !self.is_set(*f))
        .collect()
    }

    /// Required fields that are still unset
    pub fn missing_required(&self) -> Vec<ContextField> {
        ContextField::REQUIRED
            .into_iter()
            .filter(|f| !self.is_set(*f))
            .collect()
    }

    /// True iff scope, timeframe and target_entities are all set
    pub fn has_sufficient_context(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Fail unless every field a PIR needs is present
    pub fn ensure_ready_for_pir(&self) -> Result<(), DomainError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingRequiredContext(missing))
        }
    }

    /// JSON summary shown to the analyst for confirmation
    pub fn summary_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_context() -> DialogueContext {
        let mut ctx = DialogueContext::new();
        ctx.set_scope("identify attack patterns");
        ctx.set_timeframe("last 6 months");
        ctx.set_target_entities(["Norway"]);
        ctx
    }

    #[test]
    fn test_default_context() {
        let ctx = DialogueContext::new();
        assert_eq!(ctx.initial_query(), "");
        assert!(ctx.target_entities().is_empty());
        assert!(ctx.threat_actors().is_empty());
        assert_eq!(ctx.perspectives(), &[Perspective::Neutral]);
        assert!(ctx.modifications().is_none());
    }

    #[test]
    fn test_initial_query_is_write_once() {
        let mut ctx = DialogueContext::new();
        assert!(ctx.set_initial_query("Investigate APT29"));
        assert!(!ctx.set_initial_query("something else"));
        assert_eq!(ctx.initial_query(), "Investigate APT29");
    }

    #[test]
    fn test_empty_initial_query_still_counts_as_written() {
        let mut ctx = DialogueContext::new();
        assert!(ctx.set_initial_query(""));
        assert!(!ctx.set_initial_query("late"));
        assert_eq!(ctx.initial_query(), "");
    }

    #[test]
    fn test_replace_initial_query_overwrites() {
        let mut ctx = DialogueContext::new();
        ctx.set_initial_query("Investigate x");
        ctx.replace_initial_query("Investigate y");
        assert_eq!(ctx.initial_query(), "Investigate y");
    }

    #[test]
    fn test_whitespace_value_counts_as_set() {
        let mut ctx = DialogueContext::new();
        ctx.set_scope("  ");
        ctx.set_timeframe(" ");
        ctx.set_target_entities(["Norway"]);
        assert!(ctx.is_set(ContextField::Scope));
        assert!(ctx.has_sufficient_context());

        ctx.set_scope("");
        assert!(!ctx.has_sufficient_context());
    }

    #[test]
    fn test_sufficient_context_requires_three_fields() {
        let mut ctx = DialogueContext::new();
        assert!(!ctx.has_sufficient_context());

        ctx.set_scope("ransomware");
        ctx.set_timeframe("2024");
        assert!(!ctx.has_sufficient_context());

        ctx.set_target_entities(["Norway"]);
        assert!(ctx.has_sufficient_context());
    }

    #[test]
    fn test_optional_fields_do_not_affect_sufficiency() {
        let mut ctx = DialogueContext::new();
        ctx.set_threat_actors(["APT29"]);
        ctx.set_priority_focus("attack vectors");
        assert!(!ctx.has_sufficient_context());
        assert!(complete_context().has_sufficient_context());
    }

    #[test]
    fn test_missing_fields_declaration_order() {
        let mut ctx = DialogueContext::new();
        ctx.set_timeframe("2024");
        assert_eq!(
            ctx.missing_fields(),
            vec![
                ContextField::Scope,
                ContextField::TargetEntities,
                ContextField::ThreatActors,
                ContextField::PriorityFocus,
            ]
        );
    }

    #[test]
    fn test_question_priority_sort() {
        let mut fields = vec![
            ContextField::PriorityFocus,
            ContextField::Timeframe,
            ContextField::ThreatActors,
            ContextField::Scope,
            ContextField::TargetEntities,
        ];
        ContextField::sort_by_question_priority(&mut fields);
        assert_eq!(
            fields,
            vec![
                ContextField::Scope,
                ContextField::TargetEntities,
                ContextField::ThreatActors,
                ContextField::Timeframe,
                ContextField::PriorityFocus,
            ]
        );
    }

    #[test]
    fn test_apply_merges_only_present_values() {
        let mut ctx = complete_context();
        let changed = ctx.apply(
            ContextUpdate::default()
                .with_scope("  ")
                .with_threat_actors(["APT29", " "])
                .with_target_entities(Vec::<String>::new()),
        );

        assert_eq!(changed, vec![ContextField::ThreatActors]);
        assert_eq!(ctx.scope(), "identify attack patterns");
        assert_eq!(ctx.target_entities(), &["Norway".to_string()]);
        assert_eq!(ctx.threat_actors(), &["APT29".to_string()]);
    }

    #[test]
    fn test_context_update_deserializes_partial_map() {
        let update: ContextUpdate =
            serde_json::from_str(r#"{"scope": "phishing", "target_entities": ["EU"]}"#).unwrap();
        assert_eq!(update.scope.as_deref(), Some("phishing"));
        assert_eq!(update.target_entities, Some(vec!["EU".to_string()]));
        assert!(update.timeframe.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_set_perspectives_dedups_and_defaults() {
        let mut ctx = DialogueContext::new();
        ctx.set_perspectives(vec![Perspective::Us, Perspective::Eu, Perspective::Us]);
        assert_eq!(ctx.perspectives(), &[Perspective::Us, Perspective::Eu]);

        ctx.set_perspectives(vec![]);
        assert_eq!(ctx.perspectives(), &[Perspective::Neutral]);
    }

    #[test]
    fn test_ensure_ready_for_pir() {
        assert!(complete_context().ensure_ready_for_pir().is_ok());

        let mut ctx = DialogueContext::new();
        ctx.set_timeframe("2024");
        let err = ctx.ensure_ready_for_pir().unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingRequiredContext(vec![
                ContextField::Scope,
                ContextField::TargetEntities
            ])
        );
    }

    #[test]
    fn test_summary_json_contains_all_fields() {
        let mut ctx = complete_context();
        ctx.set_initial_query("Investigate x");
        ctx.set_modifications("add China");

        let value: serde_json::Value = serde_json::from_str(&ctx.summary_json()).unwrap();
        assert_eq!(value["initial_query"], "Investigate x");
        assert_eq!(value["scope"], "identify attack patterns");
        assert_eq!(value["target_entities"][0], "Norway");
        assert_eq!(value["perspectives"][0], "neutral");
        assert_eq!(value["modifications"], "add China");
        assert!(value["threat_actors"].as_array().unwrap().is_empty());
    }
}
