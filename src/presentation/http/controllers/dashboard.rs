use crate::application::dto::DashboardDto;
use crate::presentation::http::error::{ApiResult, ErrorResponse, ErrorSurface, IntoApiResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/dashboard/get-data",
    responses(
        (status = 200, description = "Chart data for the management dashboard.", body = DashboardDto),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard_data(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> ApiResult<Json<DashboardDto>> {
    state
        .services
        .dashboard
        .dashboard(&user)
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)
        .map(Json)
}
