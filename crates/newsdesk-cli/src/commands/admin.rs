//! Admin console commands.
//!
//! The article, moderation and directory tables work on JSON exports of
//! the platform data passed with `--input`.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use newsdesk_auth::PasswordGenerator;
use newsdesk_core::error::AppError;
use newsdesk_core::types::{ArticleId, ArticleSort, UserId};
use newsdesk_entity::article::{Article, ArticleStatus};
use newsdesk_entity::employee::{Employee, NewEmployee};
use newsdesk_entity::user::{StatusFilter, UserRole};
use newsdesk_service::{AllArticles, EmployeeDirectory, ModerationOutcome, PendingApprovals};

use super::news::rows;
use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Every article with search, filters and sorting
    Articles {
        /// JSON array of articles
        #[arg(short, long)]
        input: PathBuf,
        /// Search title, author and body
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only this status (draft, pending, approved, rejected)
        #[arg(long)]
        status: Option<ArticleStatus>,
        /// Sort order (newest, oldest, title, author, category)
        #[arg(long, default_value = "newest")]
        sort: ArticleSort,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Delete this article before listing
        #[arg(long)]
        delete: Option<String>,
    },
    /// Moderation queue
    Pending {
        /// JSON array of articles; only pending ones are queued
        #[arg(short, long)]
        input: PathBuf,
        /// Search title and author
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Sort order (newest, oldest, title, author, category)
        #[arg(long, default_value = "newest")]
        sort: ArticleSort,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Articles to select, comma separated
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,
        /// Select every article on the page
        #[arg(long)]
        select_page: bool,
        /// Approve the selection
        #[arg(long, conflicts_with = "reject")]
        approve: bool,
        /// Reject the selection, optionally with a reason
        #[arg(long, value_name = "REASON", num_args = 0..=1, default_missing_value = "")]
        reject: Option<String>,
    },
    /// Employee directory
    Employees {
        /// JSON array of employees
        #[arg(short, long)]
        input: PathBuf,
        /// Search name and email
        #[arg(short, long)]
        search: Option<String>,
        /// Only this department
        #[arg(short, long)]
        department: Option<String>,
        /// Account status (all, active, blocked)
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Block or unblock this employee before listing
        #[arg(long)]
        toggle_block: Option<String>,
        /// Remove this employee before listing
        #[arg(long)]
        remove: Option<String>,
    },
    /// Register a new employee with a generated password
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,
        /// Login email
        #[arg(short, long)]
        email: String,
        /// Contact number
        #[arg(long, default_value = "")]
        phone: String,
    },
}

/// Employee display row for table output
#[derive(Debug, Serialize, Tabled)]
struct EmployeeRow {
    /// User ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Department
    department: String,
    /// Status
    status: String,
    /// Articles written
    articles: u32,
    /// Approval rate
    performance: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            email: e.email.clone(),
            department: e.department.clone(),
            status: e.status().to_string(),
            articles: e.articles_count,
            performance: format!("{}%", e.performance_score()),
        }
    }
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pages = &config.pagination;

    match &args.command {
        AdminCommand::Articles {
            input,
            search,
            category,
            status,
            sort,
            page,
            delete,
        } => {
            let articles: Vec<Article> = super::read_json(input).await?;
            let mut view = AllArticles::new(articles, pages.all_articles)?;

            if let Some(id) = delete {
                let removed = view.delete(&id.parse::<ArticleId>()?)?;
                output::print_success(&format!("Deleted '{}'", removed.title));
            }

            view.set_search(search.as_deref().unwrap_or_default());
            view.set_category(category.as_deref().unwrap_or_default());
            view.set_status(*status);
            view.set_sort(*sort);
            view.go_to_page(*page);

            if format == OutputFormat::Table {
                let stats = view.stats(Utc::now());
                println!(
                    "{} articles, {} published, {} pending, {} this month, {} words on average",
                    stats.total,
                    stats.published,
                    stats.pending,
                    stats.this_month,
                    stats.average_words
                );
            }
            output::print_list(&rows(view.page_items()), format);
            output::print_page_footer(view.summary(), &view.page_bar(), format);
        }
        AdminCommand::Pending {
            input,
            search,
            category,
            sort,
            page,
            select,
            select_page,
            approve,
            reject,
        } => {
            let articles: Vec<Article> = super::read_json(input).await?;
            let mut view = PendingApprovals::new(articles, pages.pending_approvals)?;

            view.set_search(search.as_deref().unwrap_or_default());
            view.set_category(category.as_deref().unwrap_or_default());
            view.set_sort(*sort);
            view.go_to_page(*page);

            for id in select {
                let id = id.parse::<ArticleId>()?;
                if !view.toggle(&id) {
                    output::print_warning(&format!("'{id}' is not in the queue"));
                }
            }
            if *select_page {
                view.select_page();
            }

            let now = Utc::now();
            if *approve {
                report(&view.approve_selected(now)?, "Approved");
            } else if let Some(reason) = reject {
                report(&view.reject_selected(Some(reason.as_str()), now)?, "Rejected");
            }

            if format == OutputFormat::Table {
                let stats = view.stats(now);
                println!(
                    "{} pending, {} submitted today, {} selected",
                    stats.pending, stats.submitted_today, stats.selected
                );
            }
            output::print_list(&rows(view.page_items()), format);
            output::print_page_footer(view.summary(), &view.page_bar(), format);
        }
        AdminCommand::Employees {
            input,
            search,
            department,
            status,
            page,
            toggle_block,
            remove,
        } => {
            let employees: Vec<Employee> = super::read_json(input).await?;
            let mut view = EmployeeDirectory::new(employees, pages.employees)?;

            if let Some(id) = toggle_block {
                let status = view.toggle_block(&id.parse::<UserId>()?)?;
                output::print_success(&format!("Employee '{id}' is now {status}"));
            }
            if let Some(id) = remove {
                let removed = view.remove(&id.parse::<UserId>()?)?;
                output::print_success(&format!("Removed {}", removed.name));
            }

            view.set_search(search.as_deref().unwrap_or_default());
            view.set_department(department.as_deref().unwrap_or_default());
            view.set_status(*status);
            view.go_to_page(*page);

            if format == OutputFormat::Table {
                let stats = view.stats();
                println!(
                    "{} employees, {} active, {} blocked, {}% average approval",
                    stats.total, stats.active, stats.blocked, stats.average_performance
                );
                println!("Departments: {}", view.departments().join(", "));
            }
            let table: Vec<EmployeeRow> = view.page_items().iter().map(EmployeeRow::from).collect();
            output::print_list(&table, format);
            output::print_page_footer(view.summary(), &view.page_bar(), format);
        }
        AdminCommand::Register { name, email, phone } => {
            let client = super::connect(&config)?;
            let password = PasswordGenerator::new(&config.auth).generate();
            let employee = NewEmployee {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                phone_number: phone.trim().to_string(),
                role: UserRole::Employee,
                password: password.clone(),
            };
            if employee.name.is_empty() || employee.email.is_empty() {
                return Err(AppError::validation("Name and email are required"));
            }

            let message = client.register_employee(&employee).await?;
            output::print_success(message.as_deref().unwrap_or("Employee registered"));
            output::print_kv("Email", &employee.email);
            output::print_kv("Password", &password);
        }
    }

    Ok(())
}

fn report(outcome: &ModerationOutcome, verb: &str) {
    for article in &outcome.moderated {
        output::print_success(&format!("{verb} '{}'", article.title));
    }
    for id in &outcome.missing {
        output::print_warning(&format!("'{id}' was no longer pending"));
    }
}
