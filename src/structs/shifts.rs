use serde::{Deserialize, Serialize};

/// 外部 API 的 shift 資源，id 由 server 發
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Shift {
    pub id: i64,
    pub user_name: String,
    pub role: Option<String>,
    pub start_at: String,
    pub end_at: String,
    pub note: Option<String>,
}

/// POST /shifts 的 payload，選填欄位空字串要先轉成 null
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewShift {
    pub user_name: String,
    pub role: Option<String>,
    pub start_at: String,
    pub end_at: String,
    pub note: Option<String>,
}

/// 瀏覽器表單的原始值
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ShiftForm {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub start_at: String,
    #[serde(default)]
    pub end_at: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct DeleteForm {
    // 沒帶 confirmed 的送出不會打外部 API
    #[serde(default)]
    pub confirmed: bool,
}
