//! Profile entity
//!
//! Static, immutable data about the site owner: contact fields, the GitHub
//! account whose repositories are showcased, skills and certificates.
//! Loaded once at startup, either from a JSON file or the built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A certificate with a link to its public credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub credential_url: String,
}

/// Everything the page shows that is not fetched from GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub github_username: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl Profile {
    /// Load the profile from a JSON file, or fall back to the built-in one
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let profile = match path {
            Some(path) => {
                let display = path.display().to_string();
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: display.clone(),
                    source,
                })?;
                serde_json::from_str::<Profile>(&raw).map_err(|source| ConfigError::Invalid {
                    path: display,
                    source,
                })?
            }
            None => Self::builtin(),
        };

        if profile.github_username.trim().is_empty() {
            return Err(ConfigError::MissingHandle);
        }
        Ok(profile)
    }

    /// Replace the GitHub account, keeping the profile link in sync
    pub fn with_github_username(mut self, username: &str) -> Self {
        self.github_username = username.to_string();
        self.github_url = format!("https://github.com/{}", username);
        self
    }

    /// Link to the full repository list on GitHub
    pub fn repositories_url(&self) -> String {
        format!(
            "https://github.com/{}?tab=repositories",
            self.github_username
        )
    }

    pub fn builtin() -> Self {
        Self {
            name: "Starley Igbinomwhaia Briggs".to_string(),
            tagline: "Student Software Engineering • Probleemoplossend • Creatief".to_string(),
            email: "starleybriggs4@gmail.com".to_string(),
            location: "Leeuwarden, Nederland".to_string(),
            github_username: "Starley-iggy".to_string(),
            github_url: "https://github.com/Starley-iggy".to_string(),
            linkedin_url: "https://www.linkedin.com/in/starley-igbinomwhaia-briggs-a851432aa/"
                .to_string(),
            about: "Ik ben een gemotiveerde student met een passie voor leren en groeien in \
                    mijn vakgebied. Momenteel ben ik bezig met mijn Sololearning Software \
                    Developing op Firda. Ben nu aan de slag met Python, Java, mysql en php om \
                    daar ook gevorderd in te worden."
                .to_string(),
            skills: [
                "React",
                "TypeScript",
                "Next.js",
                "Tailwind",
                "Git/GitHub",
                "Python",
                "Java",
                "MySQL",
                "PHP",
                "HTML",
                "CSS",
                "C#",
                "Vercel",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            certificates: [
                ("Coding foundations", "CC-HGXQVGBL"),
                ("Tech for everyone", "CC-0Q77WDTM"),
                ("Introduction to Java", "CC-L3UZOQWB"),
                ("Write with AI", "CC-1OLZEK7W"),
                ("Introduction to SQL", "CC-YCCQ1VXI"),
                ("SQL Intermediate", "CC-5KIHKP7Y"),
                ("Data Analysis with AI", "CC-OPIQ73VY"),
                ("Java Intermediate", "CC-I5G0AMCP"),
                ("Social Media Marketing with AI", "CC-AMSOTNOP"),
            ]
            .into_iter()
            .map(|(title, code)| Certificate {
                title: title.to_string(),
                issuer: "Sololearn".to_string(),
                year: "2025".to_string(),
                credential_url: format!("https://www.sololearn.com/certificates/{}", code),
            })
            .collect(),
        }
    }
}
