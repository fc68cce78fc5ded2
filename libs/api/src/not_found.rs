use crate::{response::ApiResponse, ApiError};

pub(super) async fn get_404() -> ApiResponse<()> {
    Err(ApiError::from_code("404-001"))
}
