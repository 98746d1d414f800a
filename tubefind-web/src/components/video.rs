//! Video result components

use tubefind_search::SearchResult;

use super::layout::escape_html;

/// Renders one search result as a card linking to the video.
pub fn video_card(result: &SearchResult) -> String {
    let watch_url = escape_html(&result.watch_url());
    let title = escape_html(&result.title);

    format!(
        r#"<article class="video-card">
            <a href="{watch_url}" target="_blank" rel="noopener">
                <img src="{thumbnail}" alt="{title}" loading="lazy" />
            </a>
            <div class="body">
                <h3><a href="{watch_url}" target="_blank" rel="noopener">{title}</a></h3>
                <p class="channel">{channel}</p>
                <p class="description">{description}</p>
            </div>
        </article>"#,
        thumbnail = escape_html(&result.thumbnail_url),
        channel = escape_html(&result.channel_title),
        description = escape_html(&result.description),
    )
}

/// Renders results as a responsive grid, preserving order.
pub fn results_grid(results: &[SearchResult]) -> String {
    let cards: String = results.iter().map(video_card).collect();
    format!(r#"<section class="results-grid">{cards}</section>"#)
}
