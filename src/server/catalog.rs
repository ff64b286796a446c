//! Static reference data loaded at startup: rank table, certificate types,
//! form templates and checklist templates.
//!
//! The defaults are bundled into the binary; a deployment can override any
//! of the four files by pointing `CATALOG_DIR` at a directory containing
//! `ranks.json`, `certificate_types.json`, `forms.json` or `checklists.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::form::FormField;
use crate::server::error::Error;

static RANKS_JSON: &str = include_str!("../../catalog/ranks.json");
static CERTIFICATE_TYPES_JSON: &str = include_str!("../../catalog/certificate_types.json");
static FORMS_JSON: &str = include_str!("../../catalog/forms.json");
static CHECKLISTS_JSON: &str = include_str!("../../catalog/checklists.json");

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RankInfo {
    pub code: String,
    pub title: String,
    pub department: String,
    /// Lower number means higher rank.
    pub hierarchy: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateTypeInfo {
    pub code: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub required_for: Vec<String>,
    #[serde(default)]
    pub validity_years: Option<i32>,
    #[serde(default)]
    pub issuing_authority: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FormDefinition {
    pub code: String,
    pub title: String,
    pub category: String,
    pub pages: i32,
    pub fields: Vec<FormField>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ChecklistTemplateItem {
    pub code: String,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ChecklistTemplate {
    pub code: String,
    pub title: String,
    pub items: Vec<ChecklistTemplateItem>,
}

pub struct Catalog {
    pub ranks: Vec<RankInfo>,
    pub certificate_types: Vec<CertificateTypeInfo>,
    pub forms: Vec<FormDefinition>,
    pub checklists: Vec<ChecklistTemplate>,
}

impl Catalog {
    /// Load the catalog bundled into the binary.
    pub fn bundled() -> Result<Self, Error> {
        Ok(Self {
            ranks: serde_json::from_str(RANKS_JSON)?,
            certificate_types: serde_json::from_str(CERTIFICATE_TYPES_JSON)?,
            forms: serde_json::from_str(FORMS_JSON)?,
            checklists: serde_json::from_str(CHECKLISTS_JSON)?,
        })
    }

    /// Load the catalog with per-file overrides from `dir`. Files absent
    /// from the directory fall back to the bundled defaults.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let mut catalog = Self::bundled()?;

        if let Some(ranks) = read_override(dir, "ranks.json")? {
            catalog.ranks = serde_json::from_str(&ranks)?;
        }
        if let Some(types) = read_override(dir, "certificate_types.json")? {
            catalog.certificate_types = serde_json::from_str(&types)?;
        }
        if let Some(forms) = read_override(dir, "forms.json")? {
            catalog.forms = serde_json::from_str(&forms)?;
        }
        if let Some(checklists) = read_override(dir, "checklists.json")? {
            catalog.checklists = serde_json::from_str(&checklists)?;
        }

        Ok(catalog)
    }

    pub fn rank(&self, code: &str) -> Option<&RankInfo> {
        self.ranks.iter().find(|r| r.code == code)
    }

    pub fn certificate_type(&self, code: &str) -> Option<&CertificateTypeInfo> {
        self.certificate_types.iter().find(|c| c.code == code)
    }

    pub fn form(&self, code: &str) -> Option<&FormDefinition> {
        self.forms.iter().find(|f| f.code == code)
    }

    pub fn checklist(&self, code: &str) -> Option<&ChecklistTemplate> {
        self.checklists.iter().find(|c| c.code == code)
    }
}

fn read_override(dir: &Path, file: &str) -> Result<Option<String>, Error> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(None);
    }

    Ok(Some(std::fs::read_to_string(path)?))
}

#[cfg(test)]
mod tests {
    use super::Catalog;

    /// The bundled catalog has to parse; a broken bundle would only
    /// surface at startup otherwise.
    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::bundled().unwrap();

        assert!(!catalog.ranks.is_empty());
        assert!(!catalog.certificate_types.is_empty());
        assert!(!catalog.forms.is_empty());
        assert!(!catalog.checklists.is_empty());
    }

    #[test]
    fn rank_lookup_by_code() {
        let catalog = Catalog::bundled().unwrap();

        let master = catalog.rank("MASTER").unwrap();
        assert_eq!(master.hierarchy, 1);

        assert!(catalog.rank("NO_SUCH_RANK").is_none());
    }

    #[test]
    fn form_lookup_by_code() {
        let catalog = Catalog::bundled().unwrap();

        let form = catalog.form("HGF-CR-02").unwrap();
        assert_eq!(form.title, "Application for Employment");
        assert!(!form.fields.is_empty());
    }
}
