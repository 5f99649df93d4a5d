use crate::{
    errors::AppError,
    structs::shifts::{NewShift, ShiftForm},
};
use chrono::NaiveDateTime;

// datetime-local 的值沒有秒數，送後端前補成 %Y-%m-%dT%H:%M:%S
pub fn to_wire_datetime(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| AppError::Validation("開始・終了の日時形式が正しくありません".to_string()))?;

    Ok(parsed.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// 表單值整理成 POST /shifts 的 payload
pub fn build_payload(form: &ShiftForm) -> Result<NewShift, AppError> {
    let user_name = form.user_name.trim();
    if user_name.is_empty() {
        return Err(AppError::Validation("名前を入力してください".to_string()));
    }

    Ok(NewShift {
        user_name: user_name.to_string(),
        role: non_empty(&form.role),
        start_at: to_wire_datetime(&form.start_at)?,
        end_at: to_wire_datetime(&form.end_at)?,
        note: non_empty(&form.note),
    })
}

// 空字串（含只有空白）轉成 None，對應 API 的 null
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 一覽表顯示用的時間格式
pub fn format_display_datetime(value: &str) -> String {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.format("%Y/%m/%d %H:%M").to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_datetime_appends_seconds() {
        assert_eq!(
            to_wire_datetime("2025-11-30T10:30").unwrap(),
            "2025-11-30T10:30:00"
        );
    }

    #[test]
    fn wire_datetime_keeps_seconds_input() {
        assert_eq!(
            to_wire_datetime("2025-11-30T10:30:45").unwrap(),
            "2025-11-30T10:30:45"
        );
    }

    #[test]
    fn wire_datetime_rejects_garbage() {
        assert!(to_wire_datetime("").is_err());
        assert!(to_wire_datetime("2025/11/30 10:30").is_err());
    }

    #[test]
    fn payload_normalizes_optional_fields_to_null() {
        let form = ShiftForm {
            user_name: "田中".to_string(),
            role: "".to_string(),
            start_at: "2025-11-30T10:30".to_string(),
            end_at: "2025-11-30T12:30".to_string(),
            note: "".to_string(),
        };

        let payload = build_payload(&form).unwrap();

        assert_eq!(
            payload,
            NewShift {
                user_name: "田中".to_string(),
                role: None,
                start_at: "2025-11-30T10:30:00".to_string(),
                end_at: "2025-11-30T12:30:00".to_string(),
                note: None,
            }
        );

        // null 要真的出現在 JSON 裡
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("role").unwrap().is_null());
        assert!(json.get("note").unwrap().is_null());
    }

    #[test]
    fn payload_trims_text_fields() {
        let form = ShiftForm {
            user_name: "  佐藤  ".to_string(),
            role: " ホール ".to_string(),
            start_at: "2025-12-01T09:00".to_string(),
            end_at: "2025-12-01T17:00".to_string(),
            note: "  遅刻注意 ".to_string(),
        };

        let payload = build_payload(&form).unwrap();

        assert_eq!(payload.user_name, "佐藤");
        assert_eq!(payload.role.as_deref(), Some("ホール"));
        assert_eq!(payload.note.as_deref(), Some("遅刻注意"));
    }

    #[test]
    fn payload_rejects_blank_user_name() {
        let form = ShiftForm {
            user_name: "   ".to_string(),
            start_at: "2025-12-01T09:00".to_string(),
            end_at: "2025-12-01T17:00".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            build_payload(&form),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn display_datetime_formats_wire_strings() {
        assert_eq!(
            format_display_datetime("2025-11-30T10:30:00"),
            "2025/11/30 10:30"
        );
        // FastAPI 的 isoformat 可能帶微秒
        assert_eq!(
            format_display_datetime("2025-11-30T10:30:00.123456"),
            "2025/11/30 10:30"
        );
    }

    #[test]
    fn display_datetime_falls_back_to_raw_value() {
        assert_eq!(format_display_datetime("n/a"), "n/a");
    }
}
