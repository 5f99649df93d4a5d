use crate::{
    errors::{AppError, RequestError},
    state::AppStateV2,
    structs::shifts::{NewShift, Shift},
};

/// 取外部 API 的 shifts 清單
pub async fn fetch_shifts(state: &AppStateV2) -> Result<Vec<Shift>, AppError> {
    let client = state.get_http_client();
    let url = format!("{}/shifts", state.get_shift_api_host());

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| AppError::ConnectionError(err.into()))?;

    // 非 2xx 時把 response body 原文當錯誤訊息
    if !response.status().is_success() {
        return Err(AppError::RequestError(RequestError::InvalidContent(
            response.text().await?,
        )));
    }

    Ok(response.json::<Vec<Shift>>().await?)
}

/// 新增一筆 shift，成功時 body 不使用
pub async fn create_shift(state: &AppStateV2, payload: &NewShift) -> Result<(), AppError> {
    let client = state.get_http_client();
    let url = format!("{}/shifts", state.get_shift_api_host());

    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .map_err(|err| AppError::ConnectionError(err.into()))?;

    if !response.status().is_success() {
        return Err(AppError::RequestError(RequestError::InvalidContent(
            response.text().await?,
        )));
    }

    Ok(())
}

/// 依 id 刪除，204 跟其他 2xx 都算成功
pub async fn delete_shift(state: &AppStateV2, id: i64) -> Result<(), AppError> {
    let client = state.get_http_client();
    let url = format!("{}/shifts/{}", state.get_shift_api_host(), id);

    let response = client
        .delete(url)
        .send()
        .await
        .map_err(|err| AppError::ConnectionError(err.into()))?;

    if !response.status().is_success() {
        return Err(AppError::RequestError(RequestError::InvalidContent(
            response.text().await?,
        )));
    }

    Ok(())
}
