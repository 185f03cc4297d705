//! CLI runner - executes commands

use super::render::{page_json, render_page, render_selection, selection_json};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::TableConfig;
use crate::engine::TableController;
use crate::error::{Error, Result};
use crate::http::CatalogClient;
use crate::source::PageSource;
use serde_json::Value;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the configured catalog
    pub async fn run(&self) -> Result<()> {
        let config = self.table_config()?;
        let client = CatalogClient::from_table_config(&config)?;
        info!("Using catalog {}", config.base_url);

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.run_with(client, &config, stdin, &mut stdout).await
    }

    /// Run the CLI command against `source`, reading `browse` input from
    /// `input` and writing to `out`
    pub async fn run_with<S, R, W>(
        &self,
        source: S,
        config: &TableConfig,
        input: R,
        out: &mut W,
    ) -> Result<()>
    where
        S: PageSource,
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        match &self.cli.command {
            Commands::Page { page } => {
                let mut controller = TableController::from_config(source, config);
                self.page(&mut controller, *page, out).await
            }
            Commands::Select { count, page, scope } => {
                let config = match scope {
                    Some(scope) => config.clone().with_bulk_scope((*scope).into()),
                    None => config.clone(),
                };
                let mut controller = TableController::from_config(source, &config);
                self.select(&mut controller, count, *page, out).await
            }
            Commands::Browse => {
                let mut controller = TableController::from_config(source, config);
                self.browse(&mut controller, input, out).await
            }
        }
    }

    /// Load configuration from `--config`, then apply `--base-url`
    pub fn table_config(&self) -> Result<TableConfig> {
        let mut config = match &self.cli.config {
            Some(path) => TableConfig::from_file(path)?,
            None => TableConfig::default(),
        };
        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config.validate()?;
        Ok(config)
    }

    /// Load `page` and print it
    async fn page<S: PageSource, W: Write>(
        &self,
        controller: &mut TableController<S>,
        page: u32,
        out: &mut W,
    ) -> Result<()> {
        load_page(controller, page).await?;
        match self.cli.format {
            OutputFormat::Json => write_json(out, &page_json(controller.state())),
            OutputFormat::Pretty => write_text(out, &render_page(controller.state())),
        }
    }

    /// Load `page`, select the first `count` rows and print the selection
    async fn select<S: PageSource, W: Write>(
        &self,
        controller: &mut TableController<S>,
        count: &str,
        page: u32,
        out: &mut W,
    ) -> Result<()> {
        load_page(controller, page).await?;
        let added = controller.select_first(count).await?;
        debug!("Selected {added} rows");

        let selection = &controller.state().selection;
        match self.cli.format {
            OutputFormat::Json => write_json(out, &selection_json(selection)),
            OutputFormat::Pretty => write_text(out, &render_selection(selection)),
        }
    }

    /// Read commands line by line until `q` or end of input
    async fn browse<S, R, W>(
        &self,
        controller: &mut TableController<S>,
        input: R,
        out: &mut W,
    ) -> Result<()>
    where
        S: PageSource,
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        if let Err(e) = controller.load().await {
            writeln!(out, "error: {e}")?;
        }
        self.show(controller, out)?;
        writeln!(out, "{BROWSE_HELP}")?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = match BrowseCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(out, "{message}")?;
                    continue;
                }
            };

            let result = match command {
                BrowseCommand::Quit => break,
                BrowseCommand::Help => {
                    writeln!(out, "{BROWSE_HELP}")?;
                    continue;
                }
                BrowseCommand::List => {
                    write_text(out, &render_selection(&controller.state().selection))?;
                    continue;
                }
                BrowseCommand::Next => controller.next_page().await,
                BrowseCommand::Previous => controller.previous_page().await,
                BrowseCommand::GoTo(page) => controller.go_to_page(page).await,
                BrowseCommand::Toggle(id) => controller.toggle_row(id).await,
                BrowseCommand::Header => controller.toggle_header().await,
                BrowseCommand::Select(count) => controller.select_first(&count).await.map(|_| ()),
                BrowseCommand::Clear => controller.clear_selection().await,
            };

            for alert in controller.take_alerts() {
                writeln!(out, "! {alert}")?;
            }
            if let Err(e) = result {
                if !matches!(e, Error::InvalidRowCount { .. }) {
                    writeln!(out, "error: {e}")?;
                }
            }
            self.show(controller, out)?;
        }
        Ok(())
    }

    fn show<S: PageSource, W: Write>(
        &self,
        controller: &TableController<S>,
        out: &mut W,
    ) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => write_json(out, &page_json(controller.state())),
            OutputFormat::Pretty => write_text(out, &render_page(controller.state())),
        }
    }
}

/// Load `page`, failing if it is out of range
async fn load_page<S: PageSource>(controller: &mut TableController<S>, page: u32) -> Result<()> {
    controller.load().await?;
    if page != 1 {
        controller.go_to_page(page).await?;
    }
    if controller.state().pager.current_page() != page {
        return Err(Error::PageOutOfRange {
            page,
            total_pages: controller.state().pager.page_count().unwrap_or(0),
        });
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

const BROWSE_HELP: &str =
    "commands: n(ext) p(rev) g <page> t <id> h(eader) s <count> l(ist) c(lear) ?(help) q(uit)";

/// One line of `browse` input
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Next,
    Previous,
    GoTo(u32),
    Toggle(u64),
    Header,
    Select(String),
    List,
    Clear,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse a line; blank lines yield `None`
    pub(crate) fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();

        let command = match (word, arg) {
            ("n" | "next", None) => Self::Next,
            ("p" | "prev", None) => Self::Previous,
            ("h" | "header", None) => Self::Header,
            ("l" | "list", None) => Self::List,
            ("c" | "clear", None) => Self::Clear,
            ("?" | "help", None) => Self::Help,
            ("q" | "quit", None) => Self::Quit,
            ("g" | "goto", Some(page)) => Self::GoTo(
                page.parse()
                    .map_err(|_| format!("not a page number: {page}"))?,
            ),
            ("t" | "toggle", Some(id)) => {
                Self::Toggle(id.parse().map_err(|_| format!("not an artwork id: {id}"))?)
            }
            ("s" | "select", Some(count)) => Self::Select(count.to_string()),
            ("s" | "select", None) => Self::Select(String::new()),
            _ => return Err(format!("unknown command: {}", line.trim())),
        };
        Ok(Some(command))
    }
}
