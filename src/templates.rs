use std::any::type_name;

use actix_web::HttpResponse;
use askama::Template;

/// 200 with the rendered page, or a logged 500 if askama fails.
pub fn render<T: Template>(template: T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok().content_type(T::MIME_TYPE).body(body),
        Err(err) => {
            log::error!("Rendering {} failed: {err}", type_name::<T>());
            HttpResponse::InternalServerError().finish()
        }
    }
}
