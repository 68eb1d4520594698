use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use utoipa::{IntoParams, ToSchema};

use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogListFilter, CreateBlogData, UpdateBlogData,
};
use crate::shared::validation::{clamp_page, empty_as_none, FieldError, Validator};

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap())
}

fn check_slug(v: &mut Validator, slug: &str) {
    v.require_str("slug", slug, 200);
    if !slug.is_empty() && !slug_pattern().is_match(slug) {
        v.push(
            "slug",
            "Slug may only contain lowercase letters, digits and single hyphens",
        );
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_time: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct BlogQueryParams {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub tag: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub fn validate_create(req: CreateBlogRequest) -> Result<CreateBlogData, Vec<FieldError>> {
    let mut v = Validator::new();

    v.require_str("title", &req.title, 200);
    check_slug(&mut v, &req.slug);
    v.check_max("excerpt", req.excerpt.as_deref(), 500);
    if req.content.is_empty() {
        v.push("content", "Content is required");
    }
    v.check_url("imageUrl", req.image_url.as_deref());
    if let Some(read_time) = req.read_time {
        v.check_min("readTime", read_time, 1);
    }

    v.finish()?;

    Ok(CreateBlogData {
        title: req.title,
        slug: req.slug,
        excerpt: req.excerpt.filter(|e| !e.is_empty()),
        content: req.content,
        published: req.published,
        featured: req.featured,
        image_url: empty_as_none(req.image_url),
        tags: req.tags,
        read_time: req.read_time,
    })
}

pub fn validate_update(req: UpdateBlogRequest) -> Result<UpdateBlogData, Vec<FieldError>> {
    let mut v = Validator::new();

    if let Some(ref title) = req.title {
        v.require_str("title", title, 200);
    }
    if let Some(ref slug) = req.slug {
        check_slug(&mut v, slug);
    }
    v.check_max("excerpt", req.excerpt.as_deref(), 500);
    if let Some(ref content) = req.content {
        if content.is_empty() {
            v.push("content", "Content is required");
        }
    }
    v.check_url("imageUrl", req.image_url.as_deref());
    if let Some(read_time) = req.read_time {
        v.check_min("readTime", read_time, 1);
    }

    v.finish()?;

    Ok(UpdateBlogData {
        title: req.title,
        slug: req.slug,
        excerpt: req.excerpt,
        content: req.content,
        published: req.published,
        featured: req.featured,
        image_url: req.image_url,
        tags: req.tags,
        read_time: req.read_time,
    })
}

pub fn validate_query(params: BlogQueryParams) -> BlogListFilter {
    let (limit, offset) = clamp_page(params.limit, params.offset);
    BlogListFilter {
        published: params.published,
        featured: params.featured,
        tag: params.tag.filter(|t| !t.is_empty()),
        limit,
        offset,
    }
}
