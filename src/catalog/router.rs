use axum::{
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::catalog::controller::{add_book, find_book_by_isbn, find_books, list_books, remove_book, update_book};
use crate::core::controller::AppState;

// older clients still call the /api/libros prefix
const API_PREFIXES: [&str; 2] = ["/api/records", "/api/libros"];

pub(crate) fn catalog_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.config.static_dir.as_path())
        .append_index_html_on_directories(true);

    let mut router = Router::new();
    for prefix in API_PREFIXES {
        router = router
            .route(prefix, get(list_books).post(add_book))
            .route(format!("{}/search", prefix).as_str(), get(find_books))
            .route(format!("{}/:isbn", prefix).as_str(),
                   get(find_book_by_isbn).put(update_book).delete(remove_book));
    }
    router
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
