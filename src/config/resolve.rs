//! Layered resolution: environment, then the `configurable` override map, then defaults.

use super::schema::{FieldId, FieldSpec, FIELDS};
use super::source::{EnvSource, ProcessEnv};
use super::value::{self, Candidate, MergePolicy};
use crate::domain::Configuration;
use crate::error::Result;
use serde_json::{Map, Value};

/// Key of the nested override mapping inside an external configuration.
pub const CONFIGURABLE_KEY: &str = "configurable";

/// Resolves a [`Configuration`] from an injected environment and an optional
/// external configuration.
#[derive(Debug, Clone, Default)]
pub struct Resolver<E = ProcessEnv> {
    env: E,
    policy: MergePolicy,
    env_prefix: String,
}

impl Resolver<ProcessEnv> {
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> Resolver<E> {
    pub fn new(env: E) -> Self {
        Self { env, policy: MergePolicy::default(), env_prefix: String::new() }
    }

    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Prepend `prefix` to every environment variable name (`RESEARCH_` + `LANGUAGE`).
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    pub fn env_key(&self, spec: &FieldSpec) -> String {
        format!("{}{}", self.env_prefix, spec.env_key())
    }

    /// Surviving candidate for every field that was provided, in declaration order.
    ///
    /// A non-empty environment variable shadows the override map. Candidates the
    /// merge policy treats as unset are dropped so the field keeps its default.
    pub fn candidates(&self, external: Option<&Value>) -> Vec<(&'static FieldSpec, Candidate)> {
        let overrides = configurable(external);
        let mut found = Vec::new();

        for spec in FIELDS {
            let from_env = self.env.get(&self.env_key(spec)).filter(|raw| !raw.is_empty());
            let candidate = match from_env {
                Some(raw) => Candidate::Env(raw),
                None => match overrides.and_then(|map| map.get(spec.name)) {
                    Some(value) => Candidate::Override(value.clone()),
                    None => continue,
                },
            };

            if candidate.is_unset(self.policy) {
                tracing::debug!(
                    field = spec.name,
                    source = candidate.origin().as_str(),
                    "discarding empty value, keeping default"
                );
                continue;
            }
            found.push((spec, candidate));
        }

        found
    }

    /// Build the final configuration. Either every field resolves or the first
    /// invalid value is reported; there is no partial result.
    pub fn resolve(&self, external: Option<&Value>) -> Result<Configuration> {
        let mut config = Configuration::default();
        for (spec, candidate) in self.candidates(external) {
            assign(&mut config, spec, &candidate)?;
            tracing::debug!(
                field = spec.name,
                source = candidate.origin().as_str(),
                "resolved configuration field"
            );
        }
        Ok(config)
    }
}

/// Resolve against the process environment with the default lenient policy.
pub fn resolve(external: Option<&Value>) -> Result<Configuration> {
    Resolver::from_process_env().resolve(external)
}

/// The nested override mapping, if the external configuration carries one.
///
/// Anything other than an object under `configurable` is treated as absent.
pub fn configurable(external: Option<&Value>) -> Option<&Map<String, Value>> {
    let nested = external?.as_object()?.get(CONFIGURABLE_KEY)?;
    match nested.as_object() {
        Some(map) => Some(map),
        None => {
            if !nested.is_null() {
                tracing::warn!("ignoring non-object '{}' in external config", CONFIGURABLE_KEY);
            }
            None
        }
    }
}

fn assign(config: &mut Configuration, spec: &FieldSpec, candidate: &Candidate) -> Result<()> {
    match spec.id {
        FieldId::ReportStructure => config.report_structure = value::to_text(spec, candidate)?,
        FieldId::NumberOfQueries => config.number_of_queries = value::to_count(spec, candidate)?,
        FieldId::MaxSearchDepth => config.max_search_depth = value::to_count(spec, candidate)?,
        FieldId::PlannerProvider => config.planner_provider = value::to_provider(spec, candidate)?,
        FieldId::PlannerModel => config.planner_model = value::to_text(spec, candidate)?,
        FieldId::PlannerModelConfig => {
            config.planner_model_config = value::to_params(spec, candidate)?
        }
        FieldId::WriterProvider => config.writer_provider = value::to_provider(spec, candidate)?,
        FieldId::WriterModel => config.writer_model = value::to_text(spec, candidate)?,
        FieldId::WriterModelConfig => config.writer_model_config = value::to_params(spec, candidate)?,
        FieldId::SearchApi => config.search_api = value::to_search_api(spec, candidate)?,
        FieldId::SearchApiConfig => config.search_api_config = value::to_params(spec, candidate)?,
        FieldId::Language => config.language = value::to_text(spec, candidate)?,
    }
    Ok(())
}
