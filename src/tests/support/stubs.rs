//! Stub repositories for handler tests. Every method panics: a test that
//! wires a stub for an entity asserts that entity's storage is never touched.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogListFilter, BlogRepository, CreateBlogData, UpdateBlogData,
};
use crate::modules::blog::domain::entities::Blog;
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactListFilter, ContactRepository, CreateContactData, UpdateContactData,
};
use crate::modules::contact::domain::entities::Contact;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceListFilter, ExperienceRepository, UpdateExperienceData,
};
use crate::modules::experience::domain::entities::Experience;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectListFilter, ProjectRepository, UpdateProjectData,
};
use crate::modules::project::domain::entities::Project;
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillListFilter, SkillRepository, UpdateSkillData,
};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::storage::StorageError;

#[derive(Clone)]
pub struct StubProjectRepository;

#[async_trait]
impl ProjectRepository for StubProjectRepository {
    async fn find_all(&self, _filter: ProjectListFilter) -> Result<Vec<Project>, StorageError> {
        panic!("project repository not wired for this test")
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Project>, StorageError> {
        panic!("project repository not wired for this test")
    }

    async fn create(&self, _data: CreateProjectData) -> Result<Project, StorageError> {
        panic!("project repository not wired for this test")
    }

    async fn update(&self, _id: Uuid, _data: UpdateProjectData) -> Result<Project, StorageError> {
        panic!("project repository not wired for this test")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
        panic!("project repository not wired for this test")
    }
}

#[derive(Clone)]
pub struct StubSkillRepository;

#[async_trait]
impl SkillRepository for StubSkillRepository {
    async fn find_all(&self, _filter: SkillListFilter) -> Result<Vec<Skill>, StorageError> {
        panic!("skill repository not wired for this test")
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Skill>, StorageError> {
        panic!("skill repository not wired for this test")
    }

    async fn create(&self, _data: CreateSkillData) -> Result<Skill, StorageError> {
        panic!("skill repository not wired for this test")
    }

    async fn update(&self, _id: Uuid, _data: UpdateSkillData) -> Result<Skill, StorageError> {
        panic!("skill repository not wired for this test")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
        panic!("skill repository not wired for this test")
    }
}

#[derive(Clone)]
pub struct StubExperienceRepository;

#[async_trait]
impl ExperienceRepository for StubExperienceRepository {
    async fn find_all(
        &self,
        _filter: ExperienceListFilter,
    ) -> Result<Vec<Experience>, StorageError> {
        panic!("experience repository not wired for this test")
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Experience>, StorageError> {
        panic!("experience repository not wired for this test")
    }

    async fn create(&self, _data: CreateExperienceData) -> Result<Experience, StorageError> {
        panic!("experience repository not wired for this test")
    }

    async fn update(
        &self,
        _id: Uuid,
        _data: UpdateExperienceData,
    ) -> Result<Experience, StorageError> {
        panic!("experience repository not wired for this test")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
        panic!("experience repository not wired for this test")
    }
}

#[derive(Clone)]
pub struct StubContactRepository;

#[async_trait]
impl ContactRepository for StubContactRepository {
    async fn find_all(&self, _filter: ContactListFilter) -> Result<Vec<Contact>, StorageError> {
        panic!("contact repository not wired for this test")
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Contact>, StorageError> {
        panic!("contact repository not wired for this test")
    }

    async fn create(&self, _data: CreateContactData) -> Result<Contact, StorageError> {
        panic!("contact repository not wired for this test")
    }

    async fn update(&self, _id: Uuid, _data: UpdateContactData) -> Result<Contact, StorageError> {
        panic!("contact repository not wired for this test")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
        panic!("contact repository not wired for this test")
    }
}

#[derive(Clone)]
pub struct StubBlogRepository;

#[async_trait]
impl BlogRepository for StubBlogRepository {
    async fn find_all(&self, _filter: BlogListFilter) -> Result<Vec<Blog>, StorageError> {
        panic!("blog repository not wired for this test")
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Blog>, StorageError> {
        panic!("blog repository not wired for this test")
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Blog>, StorageError> {
        panic!("blog repository not wired for this test")
    }

    async fn create(&self, _data: CreateBlogData) -> Result<Blog, StorageError> {
        panic!("blog repository not wired for this test")
    }

    async fn update(&self, _id: Uuid, _data: UpdateBlogData) -> Result<Blog, StorageError> {
        panic!("blog repository not wired for this test")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StorageError> {
        panic!("blog repository not wired for this test")
    }
}
