use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::modules::about::{
    adapter::outgoing::sea_orm_entity::{ActiveModel as AboutActiveModel, Entity as AboutEntity},
    application::domain::entities::{Course, Education, DEFAULT_RESUME_PATH},
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    ActiveModel as ProjectActiveModel, Entity as ProjectEntity,
};
use crate::modules::skill::{
    adapter::outgoing::sea_orm_entity::{ActiveModel as SkillActiveModel, Entity as SkillEntity},
    application::domain::entities::{SkillCategory, SkillLevel},
};

// ========================= Seed Document =========================

/// Initial portfolio content, read from a JSON file.
///
/// Skill categories and levels are checked while parsing, so a bad document
/// is rejected before the database is touched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDocument {
    pub about: SeedAbout,
    #[serde(default)]
    pub projects: Vec<SeedProject>,
    #[serde(default)]
    pub skills: Vec<SeedSkill>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAbout {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    pub screenshot: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSkill {
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
    pub level: SkillLevel,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub skills: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Database error while seeding: {0}")]
    Database(#[from] DbErr),
}

// ========================= Loading =========================

pub fn parse_seed(raw: &str) -> Result<SeedDocument, SeedError> {
    Ok(serde_json::from_str(raw)?)
}

pub async fn load_seed_file(path: &Path) -> Result<SeedDocument, SeedError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;

    parse_seed(&raw)
}

// ========================= Applying =========================

/// Replaces every About, Project and Skill row with the document's content
/// inside one transaction. Contacts are left alone.
pub async fn apply_seed(
    db: &DatabaseConnection,
    doc: &SeedDocument,
) -> Result<SeedSummary, SeedError> {
    let txn = db.begin().await?;

    AboutEntity::delete_many().exec(&txn).await?;
    ProjectEntity::delete_many().exec(&txn).await?;
    SkillEntity::delete_many().exec(&txn).await?;
    info!("Cleared existing portfolio data");

    about_active_model(&doc.about)?.insert(&txn).await?;

    let seeded_at = Utc::now();
    for (index, project) in doc.projects.iter().enumerate() {
        project_active_model(project, creation_time(seeded_at, index))
            .insert(&txn)
            .await?;
    }

    for skill in &doc.skills {
        skill_active_model(skill).insert(&txn).await?;
    }

    txn.commit().await?;

    Ok(SeedSummary {
        projects: doc.projects.len(),
        skills: doc.skills.len(),
    })
}

fn about_active_model(about: &SeedAbout) -> Result<AboutActiveModel, SeedError> {
    Ok(AboutActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(about.name.clone()),
        tagline: Set(about.tagline.clone()),
        bio: Set(about.bio.clone()),
        profile_image: Set(about.profile_image.clone()),
        education: Set(serde_json::to_value(&about.education)?),
        courses: Set(serde_json::to_value(&about.courses)?),
        interests: Set(serde_json::to_value(&about.interests)?),
        resume: Set(about
            .resume
            .clone()
            .unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string())),
        created_at: NotSet,
        updated_at: NotSet,
    })
}

/// Strictly increasing per row in file order, so projects sharing an `order`
/// still have a defined newest-first tie break.
fn creation_time(seeded_at: DateTime<Utc>, index: usize) -> DateTimeWithTimeZone {
    (seeded_at + Duration::milliseconds(index as i64)).fixed_offset()
}

fn project_active_model(
    project: &SeedProject,
    created_at: DateTimeWithTimeZone,
) -> ProjectActiveModel {
    ProjectActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(project.title.clone()),
        description: Set(project.description.clone()),
        technologies: Set(serde_json::json!(project.technologies)),
        github_link: Set(project.github_link.clone()),
        demo_link: Set(project.demo_link.clone()),
        screenshot: Set(project.screenshot.clone()),
        featured: Set(project.featured),
        display_order: Set(project.order),
        created_at: Set(created_at),
        updated_at: Set(created_at),
    }
}

fn skill_active_model(skill: &SeedSkill) -> SkillActiveModel {
    SkillActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(skill.name.clone()),
        category: Set(skill.category.as_str().to_string()),
        level: Set(skill.level.value().into()),
        icon: Set(skill.icon.clone()),
        display_order: Set(skill.order),
        created_at: NotSet,
        updated_at: NotSet,
    }
}
