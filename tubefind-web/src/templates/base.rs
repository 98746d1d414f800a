//! Base HTML template with header and common styles

/// Generates the full HTML document around `content`.
///
/// `title` is inserted as-is and must already be escaped.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{title} - Tubefind</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
               background: #0f0f0f; color: #f1f1f1; line-height: 1.6; }}

        /* Header */
        header {{ background: #181818; border-bottom: 1px solid #303030; padding: 0 20px; }}
        .header-container {{ max-width: 1200px; margin: 0 auto; display: flex; align-items: center; height: 60px; }}
        .logo {{ font-size: 24px; font-weight: bold; color: #ff4e45; text-decoration: none; }}

        /* Main Content */
        .container {{ max-width: 1200px; margin: 0 auto; padding: 30px 20px; }}
        .page-header {{ margin-bottom: 24px; }}
        .page-header h1 {{ font-size: 28px; margin-bottom: 6px; }}
        .page-header p {{ color: #aaa; }}

        /* Forms */
        .search-form {{ display: flex; gap: 10px; margin-bottom: 30px; }}
        .search-form input {{ flex: 1; max-width: 560px; padding: 12px; border: 1px solid #303030;
                              background: #121212; color: #fff; border-radius: 6px; font-size: 16px; }}
        .btn {{ padding: 12px 24px; background: #ff4e45; color: #fff; border: none; border-radius: 6px;
                cursor: pointer; font-size: 16px; }}
        .btn:hover {{ background: #e0443c; }}

        /* Alerts */
        .alert {{ padding: 12px 16px; border-radius: 6px; margin-bottom: 24px; }}
        .alert-error {{ background: #3b1414; border: 1px solid #7a2323; color: #ffb4b0; }}
        .alert-info {{ background: #1c2533; border: 1px solid #2f4463; color: #b8cff0; }}

        /* Results */
        .results-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 20px; }}
        .video-card {{ background: #181818; border: 1px solid #303030; border-radius: 8px; overflow: hidden; }}
        .video-card img {{ width: 100%; aspect-ratio: 16 / 9; object-fit: cover; display: block; }}
        .video-card .body {{ padding: 12px 15px; }}
        .video-card h3 {{ font-size: 16px; margin-bottom: 4px; }}
        .video-card h3 a {{ color: #f1f1f1; text-decoration: none; }}
        .video-card h3 a:hover {{ color: #ff4e45; }}
        .video-card .channel {{ color: #aaa; font-size: 14px; margin-bottom: 6px; }}
        .video-card .description {{ color: #ccc; font-size: 14px; }}
    </style>
</head>
<body>
    <header>
        <div class="header-container">
            <a href="/" class="logo">Tubefind</a>
        </div>
    </header>

    <main class="container">
        {content}
    </main>
</body>
</html>"#
    )
}
