use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

use super::stubs::{
    StubBlogRepository, StubContactRepository, StubExperienceRepository, StubProjectRepository,
    StubSkillRepository,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRepository;
use crate::modules::contact::application::ports::outgoing::contact_repository::ContactRepository;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepository;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::modules::skill::application::ports::outgoing::skill_repository::SkillRepository;
use crate::AppState;

/// Builds an [`AppState`] for handler tests. Unconfigured entities get a
/// panicking stub, so a handler can only reach the storage it was given.
pub struct TestAppStateBuilder {
    db: Option<Arc<DatabaseConnection>>,
    projects: Option<Arc<dyn ProjectRepository>>,
    skills: Option<Arc<dyn SkillRepository>>,
    experiences: Option<Arc<dyn ExperienceRepository>>,
    contacts: Option<Arc<dyn ContactRepository>>,
    blogs: Option<Arc<dyn BlogRepository>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            db: None,
            projects: None,
            skills: None,
            experiences: None,
            contacts: None,
            blogs: None,
        }
    }

    pub fn with_db(mut self, db: Arc<DatabaseConnection>) -> Self {
        self.db = Some(db);
        self
    }

    pub fn with_projects(mut self, repo: Arc<dyn ProjectRepository>) -> Self {
        self.projects = Some(repo);
        self
    }

    pub fn with_skills(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skills = Some(repo);
        self
    }

    pub fn with_experiences(mut self, repo: Arc<dyn ExperienceRepository>) -> Self {
        self.experiences = Some(repo);
        self
    }

    pub fn with_contacts(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contacts = Some(repo);
        self
    }

    pub fn with_blogs(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blogs = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            db: self.db.unwrap_or_else(|| {
                Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
            }),
            projects: self.projects.unwrap_or_else(|| Arc::new(StubProjectRepository)),
            skills: self.skills.unwrap_or_else(|| Arc::new(StubSkillRepository)),
            experiences: self
                .experiences
                .unwrap_or_else(|| Arc::new(StubExperienceRepository)),
            contacts: self.contacts.unwrap_or_else(|| Arc::new(StubContactRepository)),
            blogs: self.blogs.unwrap_or_else(|| Arc::new(StubBlogRepository)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
