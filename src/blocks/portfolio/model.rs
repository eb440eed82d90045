//! Portfolio View-Model

use crate::assets::Glyph;
use crate::domain::progress::clamp_percent;
use crate::domain::rating::{RatingScale, StarFill};
use crate::domain::status::ProjectStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub location: String,
    pub avatar: Option<String>,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub status: ProjectStatus,
    pub year: i32,
    pub tags: Vec<String>,
    /// Reviewer score on a 0–10 scale
    pub reviewer_score: f32,
    pub url: Option<String>,
}

impl Project {
    pub fn stars(&self) -> StarFill {
        StarFill::from_score(self.reviewer_score, RatingScale::TenPoint)
    }

    pub fn score_label(&self) -> String {
        format!("{:.1} / 10", self.reviewer_score)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent
    pub level: f32,
}

impl Skill {
    pub fn progress(&self) -> f32 {
        clamp_percent(self.level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLink {
    pub label: String,
    pub href: String,
    pub glyph: Glyph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioProps {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub links: Vec<ProfileLink>,
}

impl PortfolioProps {
    /// Projects by reviewer score, best first
    pub fn ranked_projects(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.iter().collect();
        projects.sort_by(|a, b| b.reviewer_score.total_cmp(&a.reviewer_score));
        projects
    }

    /// Mean reviewer score to one decimal, `None` without projects
    pub fn average_score(&self) -> Option<f32> {
        if self.projects.is_empty() {
            return None;
        }
        let sum: f32 = self.projects.iter().map(|project| project.reviewer_score).sum();
        Some((sum / self.projects.len() as f32 * 10.0).round() / 10.0)
    }

    pub fn count(&self, status: ProjectStatus) -> usize {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .count()
    }

    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "Riley Nakamura".into(),
                role: "Product designer & front-end developer".into(),
                bio: "I design and build commerce experiences, from checkout flows to design systems used by dozens of teams.".into(),
                location: "Seattle, WA".into(),
                avatar: None,
                available: true,
            },
            projects: vec![
                Project {
                    id: "checkout-redesign".into(),
                    title: "One-page checkout redesign".into(),
                    summary: "Cut checkout abandonment by 18% with a single-step flow and wallet payments.".into(),
                    status: ProjectStatus::Live,
                    year: 2024,
                    tags: vec!["UX".into(), "Payments".into(), "A/B testing".into()],
                    reviewer_score: 9.2,
                    url: Some("https://example.com/work/checkout".into()),
                },
                Project {
                    id: "design-system".into(),
                    title: "Storefront design system".into(),
                    summary: "Component library and tokens shared across web and mobile storefronts.".into(),
                    status: ProjectStatus::InProgress,
                    year: 2024,
                    tags: vec!["Design systems".into(), "Accessibility".into()],
                    reviewer_score: 8.5,
                    url: None,
                },
                Project {
                    id: "loyalty".into(),
                    title: "Loyalty rewards dashboard".into(),
                    summary: "Points, tiers and member offers in a single account view.".into(),
                    status: ProjectStatus::Live,
                    year: 2023,
                    tags: vec!["Dashboard".into(), "Retention".into()],
                    reviewer_score: 7.8,
                    url: Some("https://example.com/work/loyalty".into()),
                },
                Project {
                    id: "catalog-search".into(),
                    title: "Catalog search prototype".into(),
                    summary: "Faceted search experiment, later folded into the main product.".into(),
                    status: ProjectStatus::Archived,
                    year: 2022,
                    tags: vec!["Search".into(), "Prototype".into()],
                    reviewer_score: 6.4,
                    url: None,
                },
            ],
            skills: vec![
                Skill {
                    name: "Interaction design".into(),
                    level: 95.0,
                },
                Skill {
                    name: "Rust & TypeScript".into(),
                    level: 80.0,
                },
                Skill {
                    name: "User research".into(),
                    level: 70.0,
                },
                Skill {
                    name: "Motion design".into(),
                    level: 55.0,
                },
            ],
            links: vec![
                ProfileLink {
                    label: "Case studies".into(),
                    href: "https://example.com/work".into(),
                    glyph: Glyph::Briefcase,
                },
                ProfileLink {
                    label: "Email".into(),
                    href: "mailto:riley@example.com".into(),
                    glyph: Glyph::Mail,
                },
                ProfileLink {
                    label: "Résumé".into(),
                    href: "https://example.com/resume.pdf".into(),
                    glyph: Glyph::ExternalLink,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_point_score_fills_half_as_many_stars() {
        let props = PortfolioProps::sample();
        let design_system = &props.projects[1];
        assert_eq!(design_system.reviewer_score, 8.5);
        assert_eq!(design_system.stars().filled, 4);
        assert_eq!(props.projects[0].stars().filled, 5);
        assert_eq!(props.projects[3].stars().filled, 3);
    }

    #[test]
    fn score_label_has_one_decimal() {
        let props = PortfolioProps::sample();
        assert_eq!(props.projects[2].score_label(), "7.8 / 10");
    }

    #[test]
    fn ranked_by_score() {
        let props = PortfolioProps::sample();
        let ids: Vec<_> = props
            .ranked_projects()
            .into_iter()
            .map(|project| project.id.as_str())
            .collect();
        assert_eq!(ids, ["checkout-redesign", "design-system", "loyalty", "catalog-search"]);
    }

    #[test]
    fn average_score() {
        let mut props = PortfolioProps::sample();
        assert_eq!(props.average_score(), Some(8.0));
        props.projects.clear();
        assert_eq!(props.average_score(), None);
    }

    #[test]
    fn counts_by_status() {
        let props = PortfolioProps::sample();
        assert_eq!(props.count(ProjectStatus::Live), 2);
        assert_eq!(props.count(ProjectStatus::Archived), 1);
    }
}
