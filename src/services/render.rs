use crate::{
    services::shifts::format_display_datetime,
    state::ShiftsView,
    structs::shifts::{Shift, ShiftForm},
};

/// 組出整頁 HTML：輸入表單 + 登錄済みシフト一覽
pub fn render_page(view: &ShiftsView, form: &ShiftForm) -> String {
    let mut page = String::new();

    page.push_str(
        r#"<!doctype html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>シフト管理</title>
<style>
body { font-family: sans-serif; background: #f8fafc; margin: 0; }
main { max-width: 56rem; margin: 0 auto; padding: 2.5rem 1rem; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 2rem; }
label { display: block; font-size: 0.875rem; color: #334155; margin-bottom: 0.75rem; }
input, textarea { display: block; width: 100%; box-sizing: border-box; margin-top: 0.25rem; padding: 0.5rem; border: 1px solid #cbd5e1; border-radius: 0.5rem; }
button { background: #2563eb; color: #fff; border: 0; border-radius: 0.5rem; padding: 0.5rem 1rem; cursor: pointer; }
button:disabled { opacity: 0.6; }
table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
th, td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #f1f5f9; }
.row-delete button { background: #fff; color: #dc2626; border: 1px solid #fecaca; }
.error { color: #dc2626; font-size: 0.875rem; }
.muted { color: #64748b; font-size: 0.875rem; }
.list-header { display: flex; justify-content: space-between; align-items: center; }
</style>
</head>
<body>
<main>
<header>
<h1>シフト管理</h1>
<p class="muted">アルバイトのシフトを登録・確認できます。</p>
</header>
"#,
    );

    page.push_str(&render_form_card(view, form));
    page.push_str(&render_list_card(view));
    page.push_str("</main>\n</body>\n</html>\n");

    page
}

fn render_form_card(view: &ShiftsView, form: &ShiftForm) -> String {
    // 送出失敗時 form 會帶原本的輸入值，成功會 redirect 回到空表單
    let submit_label = if view.loading {
        "送信中…"
    } else {
        "シフトを登録"
    };
    let disabled = if view.loading { " disabled" } else { "" };

    let error_block = if view.err.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"error\">エラー: {}</p>\n",
            escape_html(&view.err)
        )
    };

    format!(
        r#"<section class="card">
<h2>シフト入力</h2>
<form method="post" action="/shifts">
<label>名前<input type="text" name="user_name" value="{user_name}" required></label>
<label>役割（任意）<input type="text" name="role" value="{role}"></label>
<label>開始<input type="datetime-local" name="start_at" step="1800" value="{start_at}" required></label>
<label>終了<input type="datetime-local" name="end_at" step="1800" value="{end_at}" required></label>
<label>備考（任意）<textarea name="note" rows="3">{note}</textarea></label>
<button type="submit"{disabled}>{submit_label}</button>
</form>
{error_block}</section>
"#,
        user_name = escape_html(&form.user_name),
        role = escape_html(&form.role),
        start_at = escape_html(&form.start_at),
        end_at = escape_html(&form.end_at),
        note = escape_html(&form.note),
        disabled = disabled,
        submit_label = submit_label,
        error_block = error_block,
    )
}

fn render_list_card(view: &ShiftsView) -> String {
    let body = if view.loading {
        "<p class=\"muted\">読み込み中...</p>\n".to_string()
    } else if view.shifts.is_empty() {
        "<p class=\"muted\">まだシフトが登録されていません。</p>\n".to_string()
    } else {
        let rows: String = view.shifts.iter().map(render_row).collect();

        format!(
            r#"<table>
<thead>
<tr><th>名前</th><th>役割</th><th>開始</th><th>終了</th><th>操作</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
"#,
            rows = rows,
        )
    };

    format!(
        r#"<section class="card">
<div class="list-header">
<h2>登録済みシフト</h2>
<a href="/shifts">再読み込み</a>
</div>
{body}</section>
"#,
        body = body,
    )
}

fn render_row(shift: &Shift) -> String {
    let role = shift.role.as_deref().unwrap_or("-");

    format!(
        r#"<tr class="shift-row">
<td>{user_name}</td>
<td>{role}</td>
<td>{start_at}</td>
<td>{end_at}</td>
<td class="row-delete">
<form method="post" action="/shifts/{id}/delete" onsubmit="return confirm('削除しますか？');">
<input type="hidden" name="confirmed" value="true">
<button type="submit">削除</button>
</form>
</td>
</tr>
"#,
        user_name = escape_html(&shift.user_name),
        role = escape_html(role),
        start_at = format_display_datetime(&shift.start_at),
        end_at = format_display_datetime(&shift.end_at),
        id = shift.id,
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
