//! Category handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::Category;
use quill_core::validation;
use quill_shared::dto::{CategoryResponse, CreateCategoryRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(category: &Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        name: category.name.clone(),
    }
}

/// POST /categories
pub async fn create_category(
    _identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate_category_name(&req.name)?;

    let category = state.categories.insert(Category::new(req.name)).await?;

    Ok(HttpResponse::Created().json(to_response(&category)))
}

/// GET /categories
pub async fn list_categories(
    _identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let categories = state.categories.find_all().await?;

    let body: Vec<CategoryResponse> = categories.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}
