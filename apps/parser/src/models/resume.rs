use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Skill category label → skills, in first-seen order.
pub type SkillMap = IndexMap<String, Vec<String>>;

/// Everything extracted from one résumé document.
///
/// Field order is the JSON key order the site reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub contact: Contact,
    pub summary: String,
    pub skills: SkillMap,
    pub experience: Vec<Role>,
    pub education: Education,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Normalised to `linkedin.com/in/<handle>`.
    pub linkedin: String,
    /// Normalised to `github.com/<handle>`.
    pub github: String,
    pub location: String,
}

/// One employment entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date_range: String,
    #[serde(rename = "isYC")]
    pub is_yc: bool,
    #[serde(rename = "ycBatch")]
    pub yc_batch: Option<String>,
    pub product: String,
    pub domain: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
}

impl ResumeRecord {
    pub fn skill_count(&self) -> usize {
        self.skills.values().map(Vec::len).sum()
    }
}
