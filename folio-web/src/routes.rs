use crate::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

/// 管理后台路由，挂载在 `/admin` 下
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(crate::list_projects).post(crate::create_project))
        .route("/projects/create", get(crate::new_project_form))
        .route(
            "/projects/:id",
            get(crate::get_project)
                .put(crate::update_project)
                .post(crate::update_project)
                .delete(crate::delete_project),
        )
        .route("/projects/:id/edit", get(crate::edit_project_form))
        .route("/types", get(crate::list_types).post(crate::create_type))
        .route("/types/:id", delete(crate::delete_type))
        .route("/technologies", get(crate::list_technologies).post(crate::create_technology))
        .route("/technologies/:id", delete(crate::delete_technology))
}
