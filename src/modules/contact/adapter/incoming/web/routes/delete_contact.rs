use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteContactResponse {
    pub message: String,
}

#[delete("/api/contacts/{id}")]
pub async fn delete_contact_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contacts.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(DeleteContactResponse {
            message: "Contact deleted successfully".to_string(),
        }),
        Err(err) => ApiResponse::from_storage(&err),
    }
}
