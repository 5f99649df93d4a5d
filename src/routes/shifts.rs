use crate::{
    errors::AppError,
    repositories::shifts,
    services::{render, shifts::build_payload},
    state::AppStateV2,
    structs::shifts::{DeleteForm, ShiftForm},
};
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};

pub fn new() -> Router<AppStateV2> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/{id}/delete", post(delete))
}

/// シフト頁：每次進頁面都重新抓外部 API 再渲染
pub async fn index(State(state): State<AppStateV2>) -> Html<String> {
    refresh_shifts(&state).await;

    let view = state.read_view().await;
    Html(render::render_page(&view, &ShiftForm::default()))
}

/// 表單送出。成功 redirect 回空表單並重抓清單，失敗保留輸入值
pub async fn create(State(state): State<AppStateV2>, Form(form): Form<ShiftForm>) -> Response {
    // 必填檢查沒過就不打外部 API
    let payload = match build_payload(&form) {
        Ok(payload) => payload,
        Err(err) => return render_with_error(&state, &form, err).await,
    };

    match shifts::create_shift(&state, &payload).await {
        Ok(()) => Redirect::to("/shifts").into_response(),
        Err(err) => {
            tracing::error!("create_shift failed: {}", err);
            render_with_error(&state, &form, err).await
        }
    }
}

pub async fn delete(
    State(state): State<AppStateV2>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Response {
    // 未確認的送出不打任何請求
    if !form.confirmed {
        return Redirect::to("/shifts").into_response();
    }

    match shifts::delete_shift(&state, id).await {
        Ok(()) => Redirect::to("/shifts").into_response(),
        Err(err) => {
            tracing::error!("delete_shift failed: {}", err);
            render_with_error(&state, &ShiftForm::default(), err).await
        }
    }
}

// List：成功才整批換掉清單，失敗保留舊資料只記錯誤
async fn refresh_shifts(state: &AppStateV2) {
    {
        let mut view = state.write_view().await;
        view.loading = true;
        view.err.clear();
    }

    // 抓資料時不持有鎖，重複觸發的刷新是最後寫入的結果為準
    let result = shifts::fetch_shifts(state).await;

    let mut view = state.write_view().await;
    match result {
        Ok(items) => view.shifts = items,
        Err(err) => {
            tracing::error!("fetch_shifts failed: {}", err);
            view.err = err.to_string();
        }
    }
    view.loading = false;
}

async fn render_with_error(state: &AppStateV2, form: &ShiftForm, err: AppError) -> Response {
    {
        let mut view = state.write_view().await;
        view.err = err.to_string();
    }

    let view = state.read_view().await;
    Html(render::render_page(&view, form)).into_response()
}
