use actix_web::HttpResponse;

/// GET /movies - nothing is listed here yet; pages get movies through SSR.
pub async fn list() -> HttpResponse {
    HttpResponse::Ok().finish()
}
