//! Order-test view composition
//!
//! Renders the whole order-test view from a fetcher: the error slot, then
//! exactly one of "Loading...", "No data found." or the table with its page
//! controls.

use super::fetcher::{DisplayState, OrderTestRangeFetcher};
use super::paginator::PageControl;
use super::table::{escape_html, TableRenderer};
use std::fmt::Write;

/// Output format for the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFormat {
    #[default]
    Text,
    Html,
}

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No data found.";

/// Renders the current view of `fetcher`
pub fn render_view(fetcher: &OrderTestRangeFetcher, format: ViewFormat) -> String {
    match format {
        ViewFormat::Text => render_text(fetcher),
        ViewFormat::Html => render_html(fetcher),
    }
}

fn render_text(fetcher: &OrderTestRangeFetcher) -> String {
    let mut out = String::new();

    if let Some(error) = fetcher.validation_error() {
        let _ = writeln!(out, "Invalid range: {error}");
    }

    match fetcher.display_state() {
        DisplayState::Loading => {
            out.push_str(LOADING_MESSAGE);
            out.push('\n');
        }
        DisplayState::Empty => {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
        }
        DisplayState::Populated => {
            out.push_str(&TableRenderer::render_text(&fetcher.visible_rows()));
            out.push('\n');
            out.push_str(&text_controls(&fetcher.page_controls()));
            out.push('\n');
            let _ = writeln!(
                out,
                "Page {} of {} ({} records)",
                fetcher.current_page() + 1,
                fetcher.page_count(),
                fetcher.records().len()
            );
        }
    }

    out
}

/// `< Prev  1  2 [3] 4  5 ... 19  20  Next >`
pub fn text_controls(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match *control {
            PageControl::Previous { enabled: true } => "< Prev".to_string(),
            PageControl::Previous { enabled: false } => "  Prev".to_string(),
            PageControl::Page {
                index,
                current: true,
            } => format!("[{}]", index + 1),
            PageControl::Page {
                index,
                current: false,
            } => (index + 1).to_string(),
            PageControl::Break => "...".to_string(),
            PageControl::Next { enabled: true } => "Next >".to_string(),
            PageControl::Next { enabled: false } => "Next".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_html(fetcher: &OrderTestRangeFetcher) -> String {
    let mut out = String::from("<div>\n");

    if let Some(error) = fetcher.validation_error() {
        let _ = writeln!(
            out,
            "<div class=\"error\">{}</div>",
            escape_html(&error.to_string())
        );
    }

    match fetcher.display_state() {
        DisplayState::Loading => {
            let _ = writeln!(out, "<div>{LOADING_MESSAGE}</div>");
        }
        DisplayState::Empty => {
            let _ = writeln!(out, "<div>{EMPTY_MESSAGE}</div>");
        }
        DisplayState::Populated => {
            out.push_str("<div>\n");
            out.push_str(&TableRenderer::render_html(&fetcher.visible_rows()));
            out.push_str("<div class=\"pagination-container\">\n");
            out.push_str(&html_controls(&fetcher.page_controls()));
            out.push_str("</div>\n</div>\n");
        }
    }

    out.push_str("</div>\n");
    out
}

fn html_controls(controls: &[PageControl]) -> String {
    let mut out = String::from("<ul class=\"pagination\">\n");
    for control in controls {
        let _ = match *control {
            PageControl::Previous { enabled } => writeln!(
                out,
                "  <li class=\"previous{}\"><a>Previous</a></li>",
                if enabled { "" } else { " disabled" }
            ),
            PageControl::Page { index, current } => writeln!(
                out,
                "  <li{}><a data-page=\"{index}\">{}</a></li>",
                if current { " class=\"active\"" } else { "" },
                index + 1
            ),
            PageControl::Break => writeln!(out, "  <li class=\"break\"><a>...</a></li>"),
            PageControl::Next { enabled } => writeln!(
                out,
                "  <li class=\"next{}\"><a>Next</a></li>",
                if enabled { "" } else { " disabled" }
            ),
        };
    }
    out.push_str("</ul>\n");
    out
}
