//! Layout components - headers, alerts, search form

/// Escapes text for safe insertion into HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let title = escape_html(title);
    let subtitle_html = subtitle
        .map(|s| format!("<p>{}</p>", escape_html(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="page-header">
            <h1>{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Alert variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Failed action
    Error,
    /// Neutral notice
    Info,
}

/// Renders an alert banner.
pub fn alert(kind: AlertKind, message: &str) -> String {
    let class = match kind {
        AlertKind::Error => "alert-error",
        AlertKind::Info => "alert-info",
    };
    format!(
        r#"<div class="alert {class}" role="alert">{}</div>"#,
        escape_html(message)
    )
}

/// Renders the search form posting to `/search`, prefilled with `query`.
pub fn search_form(query: &str) -> String {
    format!(
        r#"<form class="search-form" method="post" action="/search">
            <input type="text" name="query" value="{}" placeholder="Search YouTube videos..." autofocus />
            <button class="btn" type="submit">Search</button>
        </form>"#,
        escape_html(query)
    )
}
