use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The static catalog of selectable resume content. Loaded once at startup;
/// the selector borrows it and never mutates it.
///
/// `tags` and `bullets` are required fields on purpose: a bank entry without
/// them is malformed and must fail at load time, not inside the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBank {
    pub projects: BTreeMap<String, Project>,
    #[serde(default)]
    pub general_statements: Vec<GeneralStatement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tags: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralStatement {
    pub text: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_deserializes_from_yaml() {
        let yaml = r#"
projects:
  churn_model:
    title: Patient Churn Model
    tags: [python, healthcare]
    bullets:
      - Built a churn model on claims data.
      - Deployed scoring as a weekly batch.
general_statements:
  - text: Comfortable presenting findings to non-technical stakeholders.
    tags: [communication]
"#;
        let bank: ContentBank = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(bank.projects.len(), 1);
        assert_eq!(bank.projects["churn_model"].bullets.len(), 2);
        assert_eq!(bank.general_statements.len(), 1);
    }

    #[test]
    fn test_project_missing_bullets_is_malformed() {
        let yaml = r#"
projects:
  broken:
    title: No Bullets Here
    tags: [python]
"#;
        assert!(serde_yaml::from_str::<ContentBank>(yaml).is_err());
    }

    #[test]
    fn test_statement_missing_tags_is_malformed() {
        let yaml = r#"
projects: {}
general_statements:
  - text: Tagless statement.
"#;
        assert!(serde_yaml::from_str::<ContentBank>(yaml).is_err());
    }
}
