// src/dashboard/admin.rs

//! Admin dashboard: overview widgets, user management, departments, and the
//! full complaints list.

use std::time::Duration;

use futures::join;

use crate::actions;
use crate::api::{
    ApiClient, complaints as complaints_api, departments as departments_api, stats,
    users as users_api,
};
use crate::config::Config;
use crate::dashboard::{
    InputLines, ListView, ask, input_lines, notify_failure, parse_id, require_role,
};
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::models::{Complaint, Department, DepartmentRequest, Role, User, UserUpdate};
use crate::pagination;
use crate::render;
use crate::state::{Sort, ViewState};

/// Which list the filter/search/page commands apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Overview,
    Users,
    Complaints,
    Departments,
}

struct AdminDashboard {
    section: Section,
    users: ListView<User>,
    complaints: ListView<Complaint>,
    departments: Vec<Department>,
}

/// Run the admin dashboard loop.
pub async fn run(client: &ApiClient, config: &Config) -> Result<()> {
    let user = require_role(client, Role::Admin).await?;
    println!("SCRS Admin Dashboard, signed in as {}", user.full_name);
    println!("Type 'help' for commands.\n");

    let mut dashboard = AdminDashboard {
        section: Section::Overview,
        users: ListView::new(
            users_api::LIST_PATH,
            ViewState::new(config.ui.page_size),
        ),
        complaints: ListView::new(
            complaints_api::LIST_PATH,
            ViewState::with_sort(config.ui.page_size, Sort::desc("createdAt")),
        ),
        departments: Vec::new(),
    };

    dashboard.show_overview(client, config).await?;

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
                if dashboard.apply_search(value) {
                    dashboard.reload_section(client, config).await?;
                }
            }
        }
    }

    Ok(())
}

impl AdminDashboard {
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

            "overview" => {
                self.section = Section::Overview;
                self.show_overview(client, config).await?;
            }
            "users" => {
                self.section = Section::Users;
                self.reload_section(client, config).await?;
            }
            "complaints" => {
                self.section = Section::Complaints;
                self.reload_section(client, config).await?;
            }
            "departments" => {
                self.section = Section::Departments;
                self.reload_section(client, config).await?;
            }

            "filter" => match (arg, rest) {
                (Some(key), Some(value)) => {
                    if let Some(state) = self.view_state_mut() {
                        state.set_filter(key, value);
                    }
                    self.reload_section(client, config).await?;
                }
                (Some(key), None) => {
                    if let Some(state) = self.view_state_mut() {
                        state.clear_filter(key);
                    }
                    self.reload_section(client, config).await?;
                }
                _ => println!("Usage: filter <key> [value]"),
            },
            "search" => {
                if self.view_state_mut().is_some() {
                    let value =
                        [arg, rest].iter().flatten().cloned().collect::<Vec<_>>().join(" ");
                    debouncer.input(value);
                } else {
                    println!("'search' works in the users and complaints sections");
                }
            }
            "clear" => {
                if let Some(state) = self.view_state_mut() {
                    state.clear_filters();
                }
                self.reload_section(client, config).await?;
            }

            "next" => {
                if let Some(state) = self.view_state_mut() {
                    state.next_page();
                }
                self.reload_section(client, config).await?;
            }
            "prev" => {
                if let Some(state) = self.view_state_mut() {
                    state.prev_page();
                }
                self.reload_section(client, config).await?;
            }
            "page" => match parse_id(arg) {
                Some(n) if n >= 1 => {
                    // Pages are displayed one-based.
                    if let Some(state) = self.view_state_mut() {
                        state.set_page(n as u32 - 1);
                    }
                    self.reload_section(client, config).await?;
                }
                _ => println!("Usage: page <number>"),
            },

            "view" => match (self.section, parse_id(arg)) {
                (Section::Users, Some(id)) => match users_api::get(client, id).await {
                    Ok(user) => {
                        println!("{}", render::users::render_user_detail(&user, &config.ui.date_format))
                    }
                    Err(e) => notify_failure(e)?,
                },
                (Section::Complaints, Some(id)) => {
                    match complaints_api::get(client, id).await {
                        Ok(c) => println!(
                            "{}",
                            render::complaints::render_complaint_detail(&c, &config.ui.date_format)
                        ),
                        Err(e) => notify_failure(e)?,
                    }
                }
                (_, Some(_)) => println!("'view' works in the users and complaints sections"),
                (_, None) => println!("Usage: view <id>"),
            },

            "enable" | "disable" => {
                let enabled = command == "enable";
                match (self.section, parse_id(arg)) {
                    (Section::Users, Some(id)) => {
                        if actions::toggle_user_status(client, id, enabled).await? {
                            self.reload_section(client, config).await?;
                        }
                    }
                    (Section::Departments, Some(id)) => {
                        if actions::toggle_department_status(client, id, enabled).await? {
                            self.reload_section(client, config).await?;
                        }
                    }
                    (_, Some(_)) => println!("'{command}' works in the users and departments sections"),
                    (_, None) => println!("Usage: {command} <id>"),
                }
            }

            "edit" => match (self.section, parse_id(arg)) {
                (Section::Users, Some(id)) => {
                    if self.edit_user(client, id, lines).await? {
                        self.reload_section(client, config).await?;
                    }
                }
                (Section::Departments, Some(id)) => {
                    if self.edit_department(client, id, lines).await? {
                        self.reload_section(client, config).await?;
                    }
                }
                (_, Some(_)) => println!("'edit' works in the users and departments sections"),
                (_, None) => println!("Usage: edit <id>"),
            },

            "add" => {
                if self.section == Section::Departments {
                    if self.add_department(client, lines).await? {
                        self.reload_section(client, config).await?;
                    }
                } else {
                    println!("'add' works in the departments section");
                }
            }

            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }

        Ok(true)
    }

    fn view_state_mut(&mut self) -> Option<&mut ViewState> {
        match self.section {
            Section::Users => Some(&mut self.users.state),
            Section::Complaints => Some(&mut self.complaints.state),
            _ => None,
        }
    }

    /// Apply a settled search value to the active list, if it has one.
    /// Returns whether a reload is warranted.
    fn apply_search(&mut self, value: String) -> bool {
        match self.view_state_mut() {
            Some(state) => {
                state.set_filter("search", value);
                true
            }
            None => false,
        }
    }

    /// Concurrent overview load; each widget degrades independently.
    async fn show_overview(&mut self, client: &ApiClient, config: &Config) -> Result<()> {
        println!("Loading overview…");

        let (stats_result, activity, trends, resolution, most_active, satisfaction) = join!(
            stats::complaints(client),
            stats::recent_activity(client),
            stats::user_trends(client),
            stats::avg_resolution_time(client),
            stats::most_active_department(client),
            stats::satisfaction_rate(client),
        );

        println!("{}", render::stats::render_complaint_stats(&widget(stats_result, "complaint stats")?));
        println!("Quick stats:");
        println!(
            "{}",
            render::stats::render_quick_stats(
                &widget(resolution, "avg resolution time")?,
                &widget(most_active, "most active department")?,
                &widget(satisfaction, "satisfaction rate")?,
            )
        );
        println!("New-user trend:");
        println!("{}", render::stats::render_user_trends(&widget(trends, "user trends")?));
        println!("Recent activity:");
        println!(
            "{}",
            render::stats::render_activity(
                &widget(activity, "recent activity")?,
                &config.ui.date_format
            )
        );
        Ok(())
    }

    async fn reload_section(&mut self, client: &ApiClient, config: &Config) -> Result<()> {
        match self.section {
            Section::Overview => self.show_overview(client, config).await?,
            Section::Users => {
                println!("Loading users…");
                if self.users.reload(client).await? {
                    println!("{}", render::users::render_users(&self.users.content, &config.ui.date_format));
                    print_controls(&self.users.state, config);
                }
            }
            Section::Complaints => {
                println!("Loading complaints…");
                if self.complaints.reload(client).await? {
                    println!(
                        "{}",
                        render::complaints::render_complaints(
                            &self.complaints.content,
                            &config.ui.date_format
                        )
                    );
                    print_controls(&self.complaints.state, config);
                }
            }
            Section::Departments => {
                println!("Loading departments…");
                match departments_api::list(client).await {
                    Ok(departments) => {
                        self.departments = departments;
                        println!("{}", render::departments::render_departments(&self.departments));
                    }
                    Err(e) => notify_failure(e)?,
                }
            }
        }
        Ok(())
    }

    async fn edit_user(
        &mut self,
        client: &ApiClient,
        id: i64,
        lines: &mut InputLines,
    ) -> Result<bool> {
        let user = match users_api::get(client, id).await {
            Ok(user) => user,
            Err(e) => {
                notify_failure(e)?;
                return Ok(false);
            }
        };

        println!("Editing user {} (blank keeps the current value)", user.username);
        let full_name = or_keep(ask(lines, &format!("Full name [{}]", user.full_name)).await?, &user.full_name);
        let email = or_keep(ask(lines, &format!("Email [{}]", user.email)).await?, &user.email);
        let role_input = ask(lines, &format!("Role [{}]", user.role.as_str())).await?;
        let role = if role_input.is_empty() {
            user.role
        } else {
            match parse_role(&role_input) {
                Some(role) => role,
                None => {
                    println!("✗ Unknown role '{role_input}'");
                    return Ok(false);
                }
            }
        };
        let department_input = ask(lines, "Department id (blank for none)").await?;
        let department_id = if department_input.is_empty() {
            user.department.as_ref().map(|d| d.id)
        } else {
            department_input.parse().ok()
        };

        let update = UserUpdate {
            full_name,
            email,
            role,
            department_id,
        };
        actions::save_user(client, id, &update).await
    }

    async fn add_department(
        &mut self,
        client: &ApiClient,
        lines: &mut InputLines,
    ) -> Result<bool> {
        let request = DepartmentRequest {
            name: ask(lines, "Department name").await?,
            description: ask(lines, "Description").await?,
        };
        actions::create_department(client, &request).await
    }

    async fn edit_department(
        &mut self,
        client: &ApiClient,
        id: i64,
        lines: &mut InputLines,
    ) -> Result<bool> {
        let dept = match departments_api::get(client, id).await {
            Ok(dept) => dept,
            Err(e) => {
                notify_failure(e)?;
                return Ok(false);
            }
        };

        println!("Editing department {} (blank keeps the current value)", dept.name);
        let name = or_keep(ask(lines, &format!("Name [{}]", dept.name)).await?, &dept.name);
        let current_desc = dept.description.clone().unwrap_or_default();
        let description = or_keep(ask(lines, "Description").await?, &current_desc);

        actions::save_department(client, id, &DepartmentRequest { name, description }).await
    }
}

fn print_controls(state: &ViewState, config: &Config) {
    let line = pagination::render_controls(
        state,
        config.ui.max_page_links,
        config.ui.pagination_when_single,
    );
    if !line.is_empty() {
        println!("{line}");
    }
}

/// Unwrap one overview widget, degrading to default on ordinary failure.
fn widget<T: Default>(result: Result<T>, what: &str) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if e.is_unauthorized() => Err(e),
        Err(e) => {
            log::warn!("Failed to load {}: {}", what, e);
            Ok(T::default())
        }
    }
}

fn or_keep(input: String, current: &str) -> String {
    if input.is_empty() {
        current.to_string()
    } else {
        input
    }
}

fn parse_role(input: &str) -> Option<Role> {
    match input.to_uppercase().as_str() {
        "STUDENT" => Some(Role::Student),
        "STAFF" => Some(Role::Staff),
        "ADMIN" => Some(Role::Admin),
        _ => None,
    }
}

fn print_help() {
    println!(
        "Sections: overview | users | complaints | departments\n\
         Lists:    filter <key> [value], search <text>, clear, next, prev, page <n>\n\
         Records:  view <id>, edit <id>, enable <id>, disable <id>, add\n\
         Other:    help, quit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn dashboard() -> AdminDashboard {
        AdminDashboard {
            section: Section::Overview,
            users: ListView::new(users_api::LIST_PATH, ViewState::new(10)),
            complaints: ListView::new(complaints_api::LIST_PATH, ViewState::new(10)),
            departments: Vec::new(),
        }
    }

    #[test]
    fn test_apply_search_only_in_searchable_sections() {
        let mut dash = dashboard();
        assert!(!dash.apply_search("acct".to_string()));

        dash.section = Section::Users;
        dash.users.state.total_pages = 3;
        dash.users.state.set_page(2);
        assert!(dash.apply_search("acct".to_string()));
        assert_eq!(dash.users.state.page, 0);
        assert_eq!(
            dash.users.state.filters().collect::<Vec<_>>(),
            vec![("search", "acct")]
        );

        dash.section = Section::Departments;
        assert!(!dash.apply_search("acct".to_string()));
    }

    #[test]
    fn test_widget_degrades_to_default_except_unauthorized() {
        assert_eq!(widget(Ok(7u64), "counter").unwrap(), 7);
        assert_eq!(widget::<u64>(Err(AppError::api(500, "boom")), "counter").unwrap(), 0);
        let err = widget::<u64>(Err(AppError::unauthorized("expired")), "counter").unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("staff"), Some(Role::Staff));
        assert_eq!(parse_role("ADMIN"), Some(Role::Admin));
        assert_eq!(parse_role("wizard"), None);
    }

    #[test]
    fn test_or_keep() {
        assert_eq!(or_keep(String::new(), "old"), "old");
        assert_eq!(or_keep("new".to_string(), "old"), "new");
    }
}
