// HTML pages
// Decision: Plain format! templates with a shared stylesheet; no template engine
// Decision: Every dynamic value goes through escape_html

/// Escape text for use inside HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn base_style() -> &'static str {
    r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        background: #f5f5f5; color: #333;
        display: flex; justify-content: center; align-items: flex-start;
        min-height: 100vh; padding: 40px 20px;
    }
    .card {
        background: #fff; border-radius: 16px; padding: 32px;
        max-width: 560px; width: 100%; box-shadow: 0 4px 24px rgba(0,0,0,0.08);
    }
    h1 { font-size: 26px; color: #1a1a2e; margin-bottom: 16px; }
    p { margin-bottom: 12px; }
    .form-group { margin-bottom: 16px; }
    .form-group label { display: block; font-size: 14px; font-weight: 500; margin-bottom: 6px; color: #444; }
    .form-group input {
        width: 100%; padding: 12px 14px; border: 1.5px solid #ddd;
        border-radius: 10px; font-size: 16px; outline: none;
    }
    .btn {
        padding: 10px 16px; border: none; border-radius: 10px;
        font-size: 15px; font-weight: 600; cursor: pointer;
    }
    .btn-primary { background: #4a6cf7; color: #fff; }
    .btn-danger { background: #fbe9e9; color: #d32f2f; }
    .error { background: #fff0f0; color: #d32f2f; padding: 10px 14px; border-radius: 8px; font-size: 13px; margin-bottom: 16px; }
    .files { list-style: none; margin: 16px 0; }
    .files li { display: flex; justify-content: space-between; align-items: center; padding: 8px 0; border-bottom: 1px solid #eee; }
    .files form { display: inline; }
    .nav { margin-top: 16px; font-size: 14px; }
    .nav a { color: #4a6cf7; text-decoration: none; margin-right: 12px; }
    "#
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head><body>
<div class="card">
{body}
</div>
</body></html>"#,
        title = escape_html(title),
        style = base_style(),
    )
}

fn error_banner(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<div class="error">{}</div>"#, escape_html(e)))
        .unwrap_or_default()
}

pub fn render_home(username: Option<&str>) -> String {
    let nav = match username {
        Some(name) => format!(
            r#"<p>Signed in as <strong>{}</strong>.</p>
<div class="nav"><a href="/dashboard">Dashboard</a><a href="/presentation">Presentations</a><a href="/logout">Log out</a></div>"#,
            escape_html(name)
        ),
        None => r#"<p>Share PDF and PowerPoint decks with your team.</p>
<div class="nav"><a href="/login">Log in</a><a href="/signup">Sign up</a></div>"#
            .to_string(),
    };

    page("Slidebox", &format!("<h1>Slidebox</h1>\n{nav}"))
}

fn credentials_form(action: &str, submit: &str, error: Option<&str>) -> String {
    format!(
        r#"{error_html}
<form method="POST" action="{action}">
  <div class="form-group">
    <label for="username">Username</label>
    <input id="username" type="text" name="username" required autocomplete="username">
  </div>
  <div class="form-group">
    <label for="password">Password</label>
    <input id="password" type="password" name="password" required>
  </div>
  <button type="submit" class="btn btn-primary">{submit}</button>
</form>"#,
        error_html = error_banner(error),
    )
}

pub fn render_signup(error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Sign up</h1>
{form}
<div class="nav">Already registered? <a href="/login">Log in</a></div>"#,
        form = credentials_form("/signup", "Create account", error),
    );
    page("Sign up", &body)
}

pub fn render_login(error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Log in</h1>
{form}
<div class="nav">No account? <a href="/signup">Sign up</a></div>"#,
        form = credentials_form("/login", "Log in", error),
    );
    page("Log in", &body)
}

pub fn render_dashboard(username: &str) -> String {
    let body = format!(
        r#"<h1>Welcome, {name}</h1>
<p>Upload and manage your presentations.</p>
<div class="nav"><a href="/presentation">Presentations</a><a href="/logout">Log out</a></div>"#,
        name = escape_html(username),
    );
    page("Dashboard", &body)
}

/// File list with upload form, optionally showing an upload error
pub fn render_presentation(username: &str, files: &[String], error: Option<&str>) -> String {
    let items = if files.is_empty() {
        "<p>No files uploaded yet.</p>".to_string()
    } else {
        let rows: Vec<String> = files
            .iter()
            .map(|name| {
                let name = escape_html(name);
                format!(
                    r#"  <li><a href="/uploads/{name}">{name}</a>
    <form method="POST" action="/delete/{name}"><button type="submit" class="btn btn-danger">Delete</button></form></li>"#
                )
            })
            .collect();
        format!("<ul class=\"files\">\n{}\n</ul>", rows.join("\n"))
    };

    let body = format!(
        r#"<h1>Presentations</h1>
<p>Signed in as <strong>{user}</strong></p>
{error_html}
<form method="POST" action="/presentation" enctype="multipart/form-data">
  <div class="form-group">
    <input type="file" name="file" accept=".pdf,.pptx">
  </div>
  <button type="submit" class="btn btn-primary">Upload</button>
</form>
{items}
<div class="nav"><a href="/dashboard">Dashboard</a><a href="/logout">Log out</a></div>"#,
        user = escape_html(username),
        error_html = error_banner(error),
    );
    page("Presentations", &body)
}

pub fn render_error(status: u16, message: &str) -> String {
    let body = format!(
        r#"<h1>Error {status}</h1>
<p>{message}</p>
<div class="nav"><a href="/">Home</a></div>"#,
        message = escape_html(message),
    );
    page("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_presentation_lists_files_with_links() {
        let html = render_presentation(
            "alice",
            &["a.pdf".to_string(), "b.pptx".to_string()],
            None,
        );
        assert!(html.contains(r#"href="/uploads/a.pdf""#));
        assert!(html.contains(r#"action="/delete/b.pptx""#));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_presentation_error_banner_is_escaped() {
        let html = render_presentation("alice", &[], Some("<bad>"));
        assert!(html.contains(r#"<div class="error">&lt;bad&gt;</div>"#));
        assert!(html.contains("No files uploaded yet."));
    }

    #[test]
    fn test_username_is_escaped() {
        let html = render_dashboard("<script>alert(1)</script>");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_home_depends_on_session() {
        assert!(render_home(None).contains(r#"href="/login""#));
        assert!(render_home(Some("bob")).contains("Signed in as <strong>bob</strong>"));
    }
}
