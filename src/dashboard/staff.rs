// src/dashboard/staff.rs

//! Staff dashboard: the assigned-complaints queue with status management,
//! commenting, CSV export, and the stats overview.

use std::time::Duration;

use crate::actions;
use crate::api::{ApiClient, complaints as complaints_api, stats as stats_api};
use crate::config::Config;
use crate::dashboard::{
    InputLines, ListView, ask, input_lines, notify_failure, parse_id, require_role,
};
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::models::{Complaint, ComplaintStatus, NewComment, Role, StatusUpdate};
use crate::pagination;
use crate::render;
use crate::state::{Sort, ViewState};

struct StaffDashboard {
    complaints: ListView<Complaint>,
}

/// Run the staff dashboard loop.
pub async fn run(client: &ApiClient, config: &Config) -> Result<()> {
    let user = require_role(client, Role::Staff).await?;
    println!("SCRS Staff Dashboard, signed in as {}", user.full_name);
    println!("Type 'help' for commands.\n");

    let mut dashboard = StaffDashboard {
        complaints: ListView::new(
            complaints_api::LIST_PATH,
            ViewState::with_sort(config.ui.page_size, Sort::desc("createdAt")),
        ),
    };
    dashboard.reload(client, config).await?;

    let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(config.ui.debounce_ms));
    let mut lines = input_lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !dashboard
                    .handle_command(line.trim(), client, config, &debouncer, &mut lines)
                    .await?
                {
                    break;
                }
            }
            Some(value) = settled.recv() => {
                dashboard.complaints.state.set_filter("search", value);
                dashboard.reload(client, config).await?;
            }
        }
    }

    Ok(())
}

impl StaffDashboard {
    async fn handle_command(
        &mut self,
        line: &str,
        client: &ApiClient,
        config: &Config,
        debouncer: &Debouncer,
        lines: &mut InputLines,
    ) -> Result<bool> {
        let mut parts = line.splitn(3, ' ');
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();
        let rest = parts.next();

        match command {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => return Ok(false),

            "list" => self.reload(client, config).await?,
            "stats" => show_stats(client).await?,
            "activity" => show_activity(client, config).await?,

            "filter" => match (arg, rest) {
                (Some(key), Some(value)) => {
                    self.complaints.state.set_filter(key, value);
                    self.reload(client, config).await?;
                }
                (Some(key), None) => {
                    self.complaints.state.clear_filter(key);
                    self.reload(client, config).await?;
                }
                _ => println!("Usage: filter <key> [value]   (keys: status, priority, department)"),
            },
            "search" => {
                let value = [arg, rest].iter().flatten().cloned().collect::<Vec<_>>().join(" ");
                debouncer.input(value);
            }
            "clear" => {
                self.complaints.state.clear_filters();
                self.reload(client, config).await?;
            }

            "next" => {
                self.complaints.state.next_page();
                self.reload(client, config).await?;
            }
            "prev" => {
                self.complaints.state.prev_page();
                self.reload(client, config).await?;
            }
            "page" => match parse_id(arg) {
                Some(n) if n >= 1 => {
                    self.complaints.state.set_page(n as u32 - 1);
                    self.reload(client, config).await?;
                }
                _ => println!("Usage: page <number>"),
            },

            "view" => match parse_id(arg) {
                Some(id) => self.show_detail(client, config, id).await?,
                None => println!("Usage: view <id>"),
            },

            "status" => match parse_id(arg) {
                Some(id) => {
                    if self.update_status(client, id, lines).await? {
                        self.reload(client, config).await?;
                    }
                }
                None => println!("Usage: status <id>"),
            },

            "comment" => match parse_id(arg) {
                Some(id) => {
                    let comment = ask(lines, "Comment").await?;
                    actions::post_comment(client, &NewComment { complaint_id: id, comment }).await?;
                }
                None => println!("Usage: comment <id>"),
            },

            "export" => self.export_csv(config, arg).await?,

            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }

        Ok(true)
    }

    async fn reload(&mut self, client: &ApiClient, config: &Config) -> Result<()> {
        println!("Loading complaints…");
        if self.complaints.reload(client).await? {
            println!(
                "{}",
                render::complaints::render_complaints(&self.complaints.content, &config.ui.date_format)
            );
            let line = pagination::render_controls(
                &self.complaints.state,
                config.ui.max_page_links,
                config.ui.pagination_when_single,
            );
            if !line.is_empty() {
                println!("{line}");
            }
        }
        Ok(())
    }

    async fn show_detail(&self, client: &ApiClient, config: &Config, id: i64) -> Result<()> {
        match complaints_api::get(client, id).await {
            Ok(c) => {
                println!("{}", render::complaints::render_complaint_detail(&c, &config.ui.date_format));
                match complaints_api::comments(client, id).await {
                    Ok(comments) => {
                        println!("Comments:");
                        println!("{}", render::complaints::render_comments(&comments, &config.ui.date_format));
                    }
                    Err(e) => notify_failure(e)?,
                }
            }
            Err(e) => notify_failure(e)?,
        }
        Ok(())
    }

    async fn update_status(
        &mut self,
        client: &ApiClient,
        id: i64,
        lines: &mut InputLines,
    ) -> Result<bool> {
        println!("Statuses:");
        for status in ComplaintStatus::SELECTABLE {
            println!("  {}", status.as_str());
        }
        let input = ask(lines, "New status").await?;
        if input.is_empty() {
            println!("✗ Status is required");
            return Ok(false);
        }
        let status = ComplaintStatus::from(input.to_uppercase());
        let comment = ask(lines, "Comment (optional)").await?;
        let update = StatusUpdate {
            status,
            comment: if comment.is_empty() { None } else { Some(comment) },
        };
        actions::update_complaint_status(client, id, &update).await
    }

    /// Write the currently loaded page to a CSV file.
    async fn export_csv(&self, config: &Config, arg: Option<&str>) -> Result<()> {
        if self.complaints.content.is_empty() {
            println!("Nothing to export. Load a complaints page first.");
            return Ok(());
        }
        let path = arg.unwrap_or("complaints.csv");
        let csv = render::complaints::to_csv(&self.complaints.content, &config.ui.date_format);
        tokio::fs::write(path, csv).await?;
        println!("✓ Exported {} complaints to {}", self.complaints.content.len(), path);
        Ok(())
    }
}

/// Per-status breakdown of the complaints pool.
async fn show_stats(client: &ApiClient) -> Result<()> {
    println!("Loading stats…");
    match stats_api::complaints(client).await {
        Ok(stats) => println!("{}", render::stats::render_complaint_stats(&stats)),
        Err(e) => notify_failure(e)?,
    }
    Ok(())
}

/// Recent-activity feed.
async fn show_activity(client: &ApiClient, config: &Config) -> Result<()> {
    println!("Loading recent activity…");
    match stats_api::recent_activity(client).await {
        Ok(feed) => println!("{}", render::stats::render_activity(&feed, &config.ui.date_format)),
        Err(e) => notify_failure(e)?,
    }
    Ok(())
}

fn print_help() {
    println!(
        "Lists:   list, filter <key> [value], search <text>, clear, next, prev, page <n>\n\
         Records: view <id>, status <id>, comment <id>\n\
         Other:   stats, activity, export [file], help, quit"
    );
}
