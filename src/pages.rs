// 🖼️ Pages - HTML for each view
//
// Pure rendering: a view plus its context in, a full HTML document out.
// Everything user-controlled goes through escape_html.

use chrono::NaiveDate;

use crate::form::RawEntryForm;
use crate::ledger::EntryType;
use crate::navigator::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline message shown above a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Everything a view needs besides its name
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub today: NaiveDate,
    pub dashboard_url: &'a str,
    pub notice: Option<Notice>,
    /// Values to refill the form with after a rejected submission
    pub form: Option<RawEntryForm>,
}

impl<'a> PageContext<'a> {
    pub fn new(today: NaiveDate, dashboard_url: &'a str) -> Self {
        PageContext {
            today,
            dashboard_url,
            notice: None,
            form: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn with_form(mut self, form: RawEntryForm) -> Self {
        self.form = Some(form);
        self
    }
}

pub fn render(view: View, ctx: &PageContext<'_>) -> String {
    match view {
        View::Home => layout("Personal Finance Tracker", &home_body()),
        View::Income | View::Expense | View::Saving => {
            let entry_type = view.entry_type().unwrap_or(EntryType::Income);
            layout(entry_type.title(), &entry_body(entry_type, ctx))
        }
        View::Dashboard => layout("Dashboard", &dashboard_body(ctx.dashboard_url)),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

/// Button posting a navigation action
fn nav_button(from: View, action: &str, target: View, label: &str) -> String {
    format!(
        r#"<form method="post" action="/navigate" class="nav">
<input type="hidden" name="from" value="{from}">
<input type="hidden" name="action" value="{action}">
<input type="hidden" name="target" value="{target}">
<button type="submit">{label}</button>
</form>"#,
        from = from.as_str(),
        action = action,
        target = target.as_str(),
        label = escape_html(label)
    )
}

fn back_button(from: View) -> String {
    nav_button(from, "back", View::Home, View::Home.button_label())
}

fn home_body() -> String {
    let cards: Vec<String> = [
        (View::Income, "Income"),
        (View::Expense, "Expense"),
        (View::Saving, "Savings"),
        (View::Dashboard, "Dashboard"),
    ]
    .into_iter()
    .map(|(view, caption)| {
        format!(
            r#"<div class="card">
<p class="card-text">{caption}</p>
{button}
</div>"#,
            caption = caption,
            button = nav_button(View::Home, "open", view, view.button_label())
        )
    })
    .collect();

    format!(
        r#"<h1>💰 Personal Finance Tracker</h1>
<p>Welcome to your personal finance tracker! Track your income, expenses, and savings effortlessly.</p>
<div class="cards">
{}
</div>"#,
        cards.join("\n")
    )
}

fn notice_html(notice: &Notice) -> String {
    let (class, icon) = match notice.kind {
        NoticeKind::Success => ("notice success", "✅"),
        NoticeKind::Error => ("notice error", "❌"),
    };
    format!(
        r#"<div class="{}" role="status">{} {}</div>"#,
        class,
        icon,
        escape_html(&notice.text)
    )
}

fn entry_body(entry_type: EntryType, ctx: &PageContext<'_>) -> String {
    let view = View::for_entry(entry_type);
    let form = ctx
        .form
        .clone()
        .unwrap_or_else(|| RawEntryForm::blank(entry_type, ctx.today));

    let options: Vec<String> = entry_type
        .categories()
        .iter()
        .map(|category| {
            let selected = if *category == form.category { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = escape_html(category),
                selected = selected
            )
        })
        .collect();

    let notice = ctx.notice.as_ref().map(notice_html).unwrap_or_default();

    format!(
        r#"{back}
<h1>{icon} {title}</h1>
{notice}
<form method="post" action="/entries/{entry}" class="entry">
<label for="date">📅 Date</label>
<input type="date" id="date" name="date" value="{date}" max="{today}" required>
<label for="category">🏷️ {category_label}</label>
<select id="category" name="category">
{options}
</select>
<label for="amount">💵 Amount</label>
<input type="number" id="amount" name="amount" min="0" step="0.01" value="{amount}" placeholder="0.00" required>
<button type="submit">{title}</button>
</form>"#,
        back = back_button(view),
        icon = entry_type.icon(),
        title = entry_type.title(),
        notice = notice,
        entry = entry_type.as_str(),
        date = escape_html(&form.date),
        today = ctx.today.format("%Y-%m-%d"),
        category_label = entry_type.category_label(),
        options = options.join("\n"),
        amount = escape_html(&form.amount)
    )
}

fn dashboard_body(dashboard_url: &str) -> String {
    format!(
        r#"{back}
<h1>📊 Dashboard</h1>
<a class="dashboard-link" href="{url}" target="_blank" rel="noopener">
<button type="button" class="dashboard">📊 View Power-BI Dashboard</button>
</a>"#,
        back = back_button(View::Dashboard),
        url = escape_html(dashboard_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> PageContext<'static> {
        PageContext::new(
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            "https://reports.example.com/dashboard?id=1&x=2",
        )
    }

    #[test]
    fn test_home_has_all_buttons() {
        let html = render(View::Home, &ctx());

        assert!(html.contains("Personal Finance Tracker"));
        for view in [View::Income, View::Expense, View::Saving, View::Dashboard] {
            assert!(html.contains(&format!(r#"name="target" value="{}""#, view.as_str())));
            assert!(html.contains(view.button_label()));
        }
    }

    #[test]
    fn test_expense_form() {
        let html = render(View::Expense, &ctx());

        assert!(html.contains(r#"action="/entries/expense""#));
        assert!(html.contains("Expense Type"));
        assert!(html.contains(r#"value="2024-06-15" max="2024-06-15""#));
        assert!(html.contains("Food &amp; Groceries"));
        assert!(html.contains(r#"name="action" value="back""#));
    }

    #[test]
    fn test_form_refilled_with_notice() {
        let form = RawEntryForm {
            date: "2024-06-16".to_string(),
            category: "Gold".to_string(),
            amount: "50.00".to_string(),
        };
        let ctx = ctx()
            .with_form(form)
            .with_notice(Notice::error("Date cannot be in the future."));

        let html = render(View::Saving, &ctx);

        assert!(html.contains(r#"<option value="Gold" selected>"#));
        assert!(html.contains(r#"value="50.00""#));
        assert!(html.contains("notice error"));
        assert!(html.contains("Date cannot be in the future."));
    }

    #[test]
    fn test_dashboard_link_opens_new_tab() {
        let html = render(View::Dashboard, &ctx());

        assert!(html.contains(r#"href="https://reports.example.com/dashboard?id=1&amp;x=2""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_notice_is_escaped() {
        let ctx = ctx().with_notice(Notice::error("<script>alert('x')</script>"));
        let html = render(View::Income, &ctx);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a & "b" <c>"#), "a &amp; &quot;b&quot; &lt;c&gt;");
    }
}
