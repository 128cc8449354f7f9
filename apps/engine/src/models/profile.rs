use serde::{Deserialize, Serialize};

/// Fixed candidate fields carried verbatim into every assembled document.
/// Name, phone, email, and summary are required; the rest default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<String>,
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}
