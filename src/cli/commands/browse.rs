//! Browse command implementation
//!
//! Interactive order-test browser. Commands are read line by line from
//! stdin; fetches run on spawned tasks so new commands are accepted while a
//! request is outstanding.

use super::fetch::{load_with_override, OutputFormat};
use crate::adapters::orders::HttpOrderTestSource;
use crate::core::{
    render_view, FetchOutcome, LogNotifier, OrderTestRangeFetcher, SystemClock,
};
use crate::domain::DateRange;
use clap::Args;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "\
Commands:
  range <start> <end>   select a date range (YYYY-MM-DD or RFC 3339, at most 7 days)
  page <n>              go to page n (1-based)
  next | prev           move one page
  refresh               refetch the selected range
  show                  redraw the current view
  help                  show this help
  quit                  exit";

/// Arguments for the browse command
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Output format (text or html)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the endpoint base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// A parsed browse command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Range { start: String, end: String },
    Page(usize),
    Next,
    Prev,
    Refresh,
    Show,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parses one input line
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(BrowseCommand::Show);
        };
        let args: Vec<&str> = words.collect();

        match (command.to_lowercase().as_str(), args.as_slice()) {
            ("range", [start, end]) => Ok(BrowseCommand::Range {
                start: start.to_string(),
                end: end.to_string(),
            }),
            ("range", _) => Err("usage: range <start> <end>".to_string()),
            ("page", [n]) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(BrowseCommand::Page(n)),
                _ => Err(format!("invalid page number '{n}'")),
            },
            ("page", _) => Err("usage: page <n>".to_string()),
            ("next", []) => Ok(BrowseCommand::Next),
            ("prev", []) => Ok(BrowseCommand::Prev),
            ("refresh", []) => Ok(BrowseCommand::Refresh),
            ("show", []) => Ok(BrowseCommand::Show),
            ("help", []) => Ok(BrowseCommand::Help),
            ("quit", []) | ("exit", []) => Ok(BrowseCommand::Quit),
            (other, _) => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}

impl BrowseArgs {
    /// Execute the browse command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting browse command");

        let config = match load_with_override(config_path, self.base_url.as_deref()) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let source = match HttpOrderTestSource::new(&config.endpoint) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to initialize order-test client: {e}");
                return Ok(2);
            }
        };

        let mut fetcher = OrderTestRangeFetcher::new(
            Arc::new(source),
            Arc::new(SystemClock),
            Arc::new(LogNotifier),
        )
        .with_pagination(&config.pagination);

        let view_format = self.format.view_format();
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{HELP}");
        println!();
        print!("{}", render_view(&fetcher, view_format));

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };

                    let command = match BrowseCommand::parse(&line) {
                        Ok(c) => c,
                        Err(e) => {
                            println!("{e}");
                            continue;
                        }
                    };

                    match command {
                        BrowseCommand::Quit => break,
                        BrowseCommand::Help => {
                            println!("{HELP}");
                            continue;
                        }
                        BrowseCommand::Range { start, end } => {
                            let range = match DateRange::parse(&start, &end) {
                                Ok(r) => r,
                                Err(e) => {
                                    println!("Invalid range: {e}");
                                    continue;
                                }
                            };
                            // Rejections land in the view's error slot
                            if let Ok(Some(request)) = fetcher.select_range(range) {
                                let tx = outcome_tx.clone();
                                tokio::spawn(async move {
                                    let _ = tx.send(request.send().await);
                                });
                            }
                        }
                        BrowseCommand::Refresh => {
                            if let Ok(Some(request)) = fetcher.refresh() {
                                let tx = outcome_tx.clone();
                                tokio::spawn(async move {
                                    let _ = tx.send(request.send().await);
                                });
                            }
                        }
                        BrowseCommand::Page(n) => fetcher.select_page(n - 1),
                        BrowseCommand::Next => {
                            if fetcher.current_page() + 1 < fetcher.page_count() {
                                fetcher.select_page(fetcher.current_page() + 1);
                            }
                        }
                        BrowseCommand::Prev => {
                            if fetcher.current_page() > 0 {
                                fetcher.select_page(fetcher.current_page() - 1);
                            }
                        }
                        BrowseCommand::Show => {}
                    }

                    print!("{}", render_view(&fetcher, view_format));
                }
                Some(outcome) = outcome_rx.recv() => {
                    fetcher.apply(outcome);
                    print!("{}", render_view(&fetcher, view_format));
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received SIGINT (Ctrl+C), leaving browser");
                    break;
                }
            }
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(
            BrowseCommand::parse("range 2023-01-01 2023-01-07").unwrap(),
            BrowseCommand::Range {
                start: "2023-01-01".to_string(),
                end: "2023-01-07".to_string()
            }
        );
        assert!(BrowseCommand::parse("range 2023-01-01").is_err());
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(BrowseCommand::parse("page 3").unwrap(), BrowseCommand::Page(3));
        assert!(BrowseCommand::parse("page 0").is_err());
        assert!(BrowseCommand::parse("page x").is_err());
        assert!(BrowseCommand::parse("page").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(BrowseCommand::parse("NEXT").unwrap(), BrowseCommand::Next);
        assert_eq!(BrowseCommand::parse(" prev ").unwrap(), BrowseCommand::Prev);
        assert_eq!(BrowseCommand::parse("refresh").unwrap(), BrowseCommand::Refresh);
        assert_eq!(BrowseCommand::parse("exit").unwrap(), BrowseCommand::Quit);
        assert_eq!(BrowseCommand::parse("").unwrap(), BrowseCommand::Show);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = BrowseCommand::parse("frobnicate").unwrap_err();
        assert!(err.contains("unknown command"));
        assert!(BrowseCommand::parse("next 2").is_err());
    }
}
