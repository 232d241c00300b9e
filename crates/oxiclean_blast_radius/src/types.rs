use serde::{Deserialize, Serialize};

/// Top-level shape of a bundler stats file (e.g. Storybook's `preview-stats.json`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsDocument {
    #[serde(default)]
    modules: Option<Vec<ModuleRecord>>,
}

impl StatsDocument {
    pub fn new(modules: Vec<ModuleRecord>) -> Self {
        Self { modules: Some(modules) }
    }

    pub fn modules(&self) -> &[ModuleRecord] {
        self.modules.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    /// Each reason names a module that depends on this one
    #[serde(default)]
    pub reasons: Option<Vec<ReasonRecord>>,
}

impl ModuleRecord {
    /// First non-empty of `name`, then `id`.
    pub fn identifier(&self) -> Option<&str> {
        [self.name.as_deref(), self.id.as_deref()].into_iter().flatten().find(|s| !s.is_empty())
    }

    pub fn reasons(&self) -> &[ReasonRecord] {
        self.reasons.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReasonRecord {
    #[serde(default, rename = "moduleName")]
    pub module_name: Option<String>,
}

impl ReasonRecord {
    pub fn dependent(&self) -> Option<&str> {
        self.module_name.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRanking {
    pub module: String,
    pub dependent_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_modules: usize,
    pub modules_with_dependencies: usize,
    pub modules_without_dependencies: usize,
    pub excluded_node_modules: bool,
}

impl Summary {
    pub fn from_results(results: &[ModuleRanking], excluded_node_modules: bool) -> Self {
        let with_deps = results.iter().filter(|r| r.dependent_count > 0).count();
        Self {
            total_modules: results.len(),
            modules_with_dependencies: with_deps,
            modules_without_dependencies: results.len() - with_deps,
            excluded_node_modules,
        }
    }
}

/// Everything produced by a single analysis run.
///
/// Only `summary` and `results` are persisted; the counters are for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub results: Vec<ModuleRanking>,
    #[serde(skip)]
    pub excluded_count: usize,
    #[serde(skip)]
    pub modules_with_direct_dependents: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(module: &str, dependent_count: usize) -> ModuleRanking {
        ModuleRanking { module: module.to_string(), dependent_count }
    }

    #[test]
    fn test_identifier_prefers_name() {
        let record = ModuleRecord {
            name: Some("./src/a.ts".into()),
            id: Some("42".into()),
            reasons: None,
        };
        assert_eq!(record.identifier(), Some("./src/a.ts"));
    }

    #[test]
    fn test_identifier_falls_back_to_id_when_name_empty() {
        let record = ModuleRecord { name: Some(String::new()), id: Some("b".into()), reasons: None };
        assert_eq!(record.identifier(), Some("b"));
    }

    #[test]
    fn test_identifier_missing() {
        let record = ModuleRecord { name: None, id: Some(String::new()), reasons: None };
        assert_eq!(record.identifier(), None);
    }

    #[test]
    fn test_deserialize_tolerates_missing_and_null_fields() {
        let doc: StatsDocument = serde_json::from_str(
            r#"{
                "modules": [
                    {"name": "a", "reasons": null, "size": 120},
                    {"id": "b", "reasons": [{"moduleName": null}, {"moduleName": "a", "type": "import"}]}
                ]
            }"#,
        )
        .unwrap();

        let modules = doc.modules();
        assert_eq!(modules.len(), 2);
        assert!(modules[0].reasons().is_empty());
        assert_eq!(modules[1].identifier(), Some("b"));
        let dependents: Vec<_> = modules[1].reasons().iter().filter_map(|r| r.dependent()).collect();
        assert_eq!(dependents, vec!["a"]);
    }

    #[test]
    fn test_deserialize_without_modules_field() {
        let doc: StatsDocument = serde_json::from_str(r#"{"chunks": []}"#).unwrap();
        assert!(doc.modules().is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![ranking("a", 2), ranking("b", 1), ranking("c", 0)];
        let summary = Summary::from_results(&results, true);
        assert_eq!(summary.total_modules, 3);
        assert_eq!(summary.modules_with_dependencies, 2);
        assert_eq!(summary.modules_without_dependencies, 1);
        assert!(summary.excluded_node_modules);
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::from_results(&[], false);
        assert_eq!(summary, Summary::default());
    }
}
