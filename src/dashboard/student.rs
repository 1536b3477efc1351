// src/dashboard/student.rs

//! Student dashboard: personal complaint list, the public feed with voting
//! and comments, and the submission form.

use std::time::Duration;

use crate::actions;
use crate::api::{
    ApiClient, complaints as complaints_api, departments as departments_api, votes as votes_api,
};
use crate::config::Config;
use crate::dashboard::{
    InputLines, ListView, ask, input_lines, notify_failure, parse_id, require_role,
};
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::loader;
use crate::models::{
    Complaint, ComplaintStats, ComplaintStatus, NewComment, NewComplaint, Page, Priority, Role,
    VoteType,
};
use crate::pagination;
use crate::render;
use crate::state::{Sort, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Mine,
    Public,
}

struct StudentDashboard {
    section: Section,
    mine: ListView<Complaint>,
    public: ListView<Complaint>,
}

/// Run the student dashboard loop.
pub async fn run(client: &ApiClient, config: &Config) -> Result<()> {
    let user = require_role(client, Role::Student).await?;
    println!("SCRS Student Dashboard, signed in as {}", user.full_name);
    println!("Type 'help' for commands.\n");

    let mut dashboard = StudentDashboard {
        section: Section::Mine,
        mine: ListView::new(
            complaints_api::MY_LIST_PATH,
            ViewState::with_sort(config.ui.page_size, Sort::desc("createdAt")),
        ),
        public: ListView::new(
            complaints_api::PUBLIC_LIST_PATH,
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
                dashboard.view_mut().state.set_filter("search", value);
                dashboard.reload(client, config).await?;
            }
        }
    }

    Ok(())
}

impl StudentDashboard {
    fn view_mut(&mut self) -> &mut ListView<Complaint> {
        match self.section {
            Section::Mine => &mut self.mine,
            Section::Public => &mut self.public,
        }
    }

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

            "stats" => self.show_stats(client).await?,
            "mine" => {
                self.section = Section::Mine;
                self.reload(client, config).await?;
            }
            "public" => {
                self.section = Section::Public;
                self.reload(client, config).await?;
            }

            "filter" => match (arg, rest) {
                (Some(key), Some(value)) => {
                    self.view_mut().state.set_filter(key, value);
                    self.reload(client, config).await?;
                }
                (Some(key), None) => {
                    self.view_mut().state.clear_filter(key);
                    self.reload(client, config).await?;
                }
                _ => println!("Usage: filter <key> [value]   (keys: status, type)"),
            },
            "search" => {
                let value = [arg, rest].iter().flatten().cloned().collect::<Vec<_>>().join(" ");
                debouncer.input(value);
            }
            "clear" => {
                self.view_mut().state.clear_filters();
                self.reload(client, config).await?;
            }

            "next" => {
                self.view_mut().state.next_page();
                self.reload(client, config).await?;
            }
            "prev" => {
                self.view_mut().state.prev_page();
                self.reload(client, config).await?;
            }
            "page" => match parse_id(arg) {
                Some(n) if n >= 1 => {
                    self.view_mut().state.set_page(n as u32 - 1);
                    self.reload(client, config).await?;
                }
                _ => println!("Usage: page <number>"),
            },

            "view" => match parse_id(arg) {
                Some(id) => self.show_detail(client, config, id).await?,
                None => println!("Usage: view <id>"),
            },

            "submit" => {
                if self.submit(client, lines).await? {
                    self.section = Section::Mine;
                    self.reload(client, config).await?;
                }
            }
            "edit" => match parse_id(arg) {
                Some(id) => {
                    if self.edit(client, id, lines).await? {
                        self.reload(client, config).await?;
                    }
                }
                None => println!("Usage: edit <id>"),
            },
            "delete" => match parse_id(arg) {
                Some(id) => {
                    let confirm = ask(lines, "Delete this complaint? (y/N)").await?;
                    if confirm.eq_ignore_ascii_case("y")
                        && actions::delete_complaint(client, id).await?
                    {
                        self.reload(client, config).await?;
                    }
                }
                None => println!("Usage: delete <id>"),
            },

            "upvote" | "downvote" => match parse_id(arg) {
                Some(id) => {
                    let vote = if command == "upvote" {
                        VoteType::Upvote
                    } else {
                        VoteType::Downvote
                    };
                    if actions::cast_vote(client, id, vote).await? {
                        match votes_api::tally(client, id).await {
                            Ok(summary) => {
                                println!("  ▲ {}  ▼ {}", summary.upvotes, summary.downvotes)
                            }
                            Err(e) => notify_failure(e)?,
                        }
                    }
                }
                None => println!("Usage: {command} <id>"),
            },
            "comment" => match parse_id(arg) {
                Some(id) => {
                    let comment = ask(lines, "Comment").await?;
                    actions::post_comment(client, &NewComment { complaint_id: id, comment }).await?;
                }
                None => println!("Usage: comment <id>"),
            },

            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }

        Ok(true)
    }

    async fn reload(&mut self, client: &ApiClient, config: &Config) -> Result<()> {
        let section = self.section;
        let view = self.view_mut();
        match section {
            Section::Mine => println!("Loading your complaints…"),
            Section::Public => println!("Loading public complaints…"),
        }
        if view.reload(client).await? {
            let rendered = match section {
                Section::Mine => {
                    render::complaints::render_complaints(&view.content, &config.ui.date_format)
                }
                Section::Public => {
                    render::complaints::render_complaint_cards(&view.content, &config.ui.date_format)
                }
            };
            println!("{rendered}");
            let line = pagination::render_controls(
                &view.state,
                config.ui.max_page_links,
                config.ui.pagination_when_single,
            );
            if !line.is_empty() {
                println!("{line}");
            }
        }
        Ok(())
    }

    /// Personal status breakdown, tallied client-side over the full list.
    async fn show_stats(&self, client: &ApiClient) -> Result<()> {
        let mut state = ViewState::new(1000);
        let page: Page<Complaint> =
            match loader::fetch_page(client, complaints_api::MY_LIST_PATH, &mut state).await {
                Ok(page) => page,
                Err(e) => return notify_failure(e),
            };

        let mut stats = ComplaintStats {
            total: page.total_elements,
            ..Default::default()
        };
        for c in &page.content {
            match c.status {
                ComplaintStatus::Submitted => stats.submitted += 1,
                ComplaintStatus::InReview => stats.in_review += 1,
                ComplaintStatus::Assigned => stats.assigned += 1,
                ComplaintStatus::InProgress => stats.in_progress += 1,
                ComplaintStatus::Resolved => stats.resolved += 1,
                ComplaintStatus::Rejected => stats.rejected += 1,
                ComplaintStatus::Closed => stats.closed += 1,
                ComplaintStatus::Other(_) => {}
            }
        }
        println!("{}", render::stats::render_complaint_stats(&stats));
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

    async fn submit(&self, client: &ApiClient, lines: &mut InputLines) -> Result<bool> {
        let body = match self.complaint_form(client, lines, None).await? {
            Some(body) => body,
            None => return Ok(false),
        };
        actions::submit_complaint(client, &body).await
    }

    async fn edit(&self, client: &ApiClient, id: i64, lines: &mut InputLines) -> Result<bool> {
        let existing = match complaints_api::get(client, id).await {
            Ok(c) => c,
            Err(e) => {
                notify_failure(e)?;
                return Ok(false);
            }
        };
        let body = match self.complaint_form(client, lines, Some(&existing)).await? {
            Some(body) => body,
            None => return Ok(false),
        };
        actions::save_complaint(client, id, &body).await
    }

    /// Interactive complaint form, prefilled from `existing` when editing.
    async fn complaint_form(
        &self,
        client: &ApiClient,
        lines: &mut InputLines,
        existing: Option<&Complaint>,
    ) -> Result<Option<NewComplaint>> {
        let departments = match departments_api::list(client).await {
            Ok(list) => list,
            Err(e) => {
                notify_failure(e)?;
                return Ok(None);
            }
        };
        println!("Departments:");
        println!("{}", render::departments::render_department_choices(&departments));

        let title = prefilled(ask(lines, "Title").await?, existing.map(|c| c.title.as_str()));
        let description = prefilled(
            ask(lines, "Description").await?,
            existing.map(|c| c.description.as_str()),
        );
        let complaint_type = prefilled(
            ask(lines, "Type (ACADEMIC, FACILITY, HOSTEL, OTHER, ...)").await?,
            existing.map(|c| c.complaint_type.as_str()),
        )
        .to_uppercase();
        let department_input = ask(lines, "Department id").await?;
        let department_id = match department_input.parse() {
            Ok(id) => id,
            Err(_) => match existing.and_then(|c| c.department.as_ref()) {
                Some(d) => d.id,
                None => {
                    println!("✗ Department is required");
                    return Ok(None);
                }
            },
        };
        let priority_input = ask(lines, "Priority (low/medium/high)").await?;
        let priority = match priority_input.to_lowercase().as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            "" => existing.map(|c| c.priority).unwrap_or(Priority::Medium),
            other => {
                println!("✗ Unknown priority '{other}'");
                return Ok(None);
            }
        };
        let public_input = ask(lines, "Make public? (y/N)").await?;
        let is_public = if public_input.is_empty() {
            existing.map(|c| c.is_public).unwrap_or(false)
        } else {
            public_input.eq_ignore_ascii_case("y")
        };

        Ok(Some(NewComplaint {
            title,
            description,
            complaint_type,
            department_id,
            is_public,
            priority,
        }))
    }
}

fn prefilled(input: String, existing: Option<&str>) -> String {
    if input.is_empty() {
        existing.unwrap_or_default().to_string()
    } else {
        input
    }
}

fn print_help() {
    println!(
        "Sections: mine | public | stats\n\
         Lists:    filter <key> [value], search <text>, clear, next, prev, page <n>\n\
         Records:  view <id>, submit, edit <id>, delete <id>\n\
         Public:   upvote <id>, downvote <id>, comment <id>\n\
         Other:    help, quit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled() {
        assert_eq!(prefilled(String::new(), Some("kept")), "kept");
        assert_eq!(prefilled("typed".to_string(), Some("kept")), "typed");
        assert_eq!(prefilled(String::new(), None), "");
    }
}
