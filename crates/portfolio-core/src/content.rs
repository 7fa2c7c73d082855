//! Portfolio content.
//!
//! Everything the page shows that is not a translated UI string: personal
//! details, info cards, project showcases, skills, accomplishments and
//! contact links. The built-in content can be replaced with a JSON file of
//! the same shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PortfolioError, PortfolioResult};
use crate::icons::IconKind;

/// Interval between hero background changes
pub const BACKGROUND_ROTATION_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub photo_url: String,
    pub cv_url: String,
    /// Images cycled behind the hero section
    #[serde(default)]
    pub hero_backgrounds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub icon: IconKind,
}

impl InfoCard {
    /// Localization key for the card title
    pub fn title_key(&self) -> String {
        format!("about.cards.{}.title", self.id)
    }

    /// Localization key for the card content
    pub fn content_key(&self) -> String {
        format!("about.cards.{}.content", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutInfo {
    pub bio: String,
    pub info_cards: Vec<InfoCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectShowcase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tech_stack: Vec<String>,
    pub live_demo_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsInfo {
    pub categories: Vec<SkillCategory>,
    pub project_showcases: Vec<ProjectShowcase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsInfo {
    pub accomplishments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub linkedin_url: String,
    pub github_url: String,
}

impl ContactInfo {
    /// `tel:` URI for the phone number, if one is listed
    pub fn phone_uri(&self) -> Option<String> {
        self.phone.as_ref().map(|p| format!("tel:{}", p))
    }

    /// Plain `mailto:` URI for the contact address
    pub fn email_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Strip the `https://` scheme for display
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}

/// Index of the next hero background, wrapping at `len`
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// All portfolio content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub skills: SkillsInfo,
    pub projects: ProjectsInfo,
    pub contact: ContactInfo,
}

impl PortfolioData {
    /// Load content from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let data: Self = serde_json::from_str(&raw)?;
        data.check()?;
        info!(path = %path.display(), "Loaded portfolio content");
        Ok(data)
    }

    fn check(&self) -> PortfolioResult<()> {
        if self.personal.name.trim().is_empty() {
            return Err(PortfolioError::Content("personal.name is empty".to_string()));
        }
        if self.contact.email.trim().is_empty() {
            return Err(PortfolioError::Content("contact.email is empty".to_string()));
        }
        Ok(())
    }

    /// Content shipped with the application
    pub fn builtin() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        let card = |id: &str, title: &str, content: &str, icon: IconKind| InfoCard {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            icon,
        };

        let showcase = |id: &str, title: &str, description: &str, image: &str, stack: &[&str], demo: &str, repo: &str| {
            ProjectShowcase {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                image_url: image.to_string(),
                tech_stack: strings(stack),
                live_demo_url: demo.to_string(),
                github_url: repo.to_string(),
            }
        };

        let category = |title: &str, skills: &[&str]| SkillCategory {
            title: title.to_string(),
            skills: strings(skills),
        };

        Self {
            personal: PersonalInfo {
                name: "Meseret Mezgebu".to_string(),
                title: "Full-Stack Developer | React & Node.js Enthusiast".to_string(),
                location: "Based in Ethiopia \u{1F1EA}\u{1F1F9}".to_string(),
                photo_url: "/images/profile.jpg".to_string(),
                cv_url: "/cv/Meseret Mezgebu Sisay.pdf".to_string(),
                hero_backgrounds: strings(&[
                    "/images/ecommerce.png",
                    "/images/elearning.png",
                    "/images/joblink.png",
                ]),
            },
            about: AboutInfo {
                bio: "I am a third-year Software Engineering student at Wollo University with a \
                      passion for building web applications and solving real-world problems using \
                      technology. Skilled in React and Node.js, I aim to become a proficient \
                      full-stack developer."
                    .to_string(),
                info_cards: vec![
                    card("education", "Education", "Wollo University", IconKind::GraduationCap),
                    card("career-goal", "Career Goal", "Full-Stack Developer", IconKind::Code),
                    card("tech-passion", "Tech Passion", "React & Node.js", IconKind::React),
                    card("current-focus", "Current Focus", "Learning DSA & APIs", IconKind::ChartLine),
                ],
            },
            skills: SkillsInfo {
                categories: vec![
                    category("Frontend", &["HTML", "CSS", "JavaScript", "React.js"]),
                    category("Backend", &["Node.js", "Express.js", "MongoDB", "REST APIs"]),
                    category("Tools", &["Git & GitHub", "Postman", "VS Code", "Vercel"]),
                    category("Computer Science", &["Data Structures", "Algorithms"]),
                ],
                project_showcases: vec![
                    showcase(
                        "ecommerce",
                        "E-Commerce Website",
                        "Full-stack e-commerce platform with payment integration",
                        "/images/ecommerce.png",
                        &["React", "Node.js", "MongoDB", "Express"],
                        "https://modoo-ecomerce.vercel.app/",
                        "https://github.com/mesi0621/modo-ecommerce",
                    ),
                    showcase(
                        "elearning",
                        "E-Learning Platform",
                        "Online learning management system",
                        "/images/elearning.png",
                        &["React", "Node.js", "MongoDB", "Express"],
                        "https://elearning-demo.vercel.app/",
                        "https://github.com/mesi0621/E-learning",
                    ),
                    showcase(
                        "joblink",
                        "JobLink Africa",
                        "Job portal connecting employers and job seekers",
                        "/images/joblink.png",
                        &["React", "Node.js", "PostgreSQL", "Express"],
                        "https://joblink-africa.vercel.app/",
                        "https://github.com/mesi0621/joblink-africa",
                    ),
                ],
            },
            projects: ProjectsInfo {
                accomplishments: strings(&[
                    "Built full-stack REST APIs",
                    "Integrated payment systems (Chapa, Telebirr)",
                    "Deployed backend on Render",
                    "Hosted frontend on Vercel",
                ]),
            },
            contact: ContactInfo {
                email: "mezgebemessi@gmail.com".to_string(),
                phone: Some("+251924531549".to_string()),
                linkedin_url: "https://linkedin.com/in/messi-mezgebe-8bb536365".to_string(),
                github_url: "https://github.com/mesi0621".to_string(),
            },
        }
    }
}
