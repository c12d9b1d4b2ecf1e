//! Public news commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use newsdesk_core::error::AppError;
use newsdesk_core::types::ArticleId;
use newsdesk_entity::article::{Article, strip_html};
use newsdesk_service::NewsFeed;

use crate::output::{self, OutputFormat};

/// Arguments for news commands
#[derive(Debug, Args)]
pub struct NewsArgs {
    /// News subcommand
    #[command(subcommand)]
    pub command: NewsCommand,
}

/// News subcommands
#[derive(Debug, Subcommand)]
pub enum NewsCommand {
    /// List published news
    List {
        /// Batch fetched from the platform
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Search title, summary and body
        #[arg(short, long)]
        search: Option<String>,
        /// Page of the local list within the batch
        #[arg(long, default_value_t = 1)]
        view_page: usize,
    },
    /// Read one article
    Show {
        /// Article ID
        id: String,
    },
}

/// Article display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct ArticleRow {
    /// Article ID
    pub id: String,
    /// Headline
    pub title: String,
    /// Category
    pub category: String,
    /// Author
    pub author: String,
    /// Status
    pub status: String,
    /// Publication or creation date
    pub date: String,
    /// Views
    pub views: u64,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: output::truncate(&article.title, 48),
            category: article.category.clone(),
            author: article.author.name.clone(),
            status: article.status.to_string(),
            date: article.display_date().format("%Y-%m-%d").to_string(),
            views: article.views,
        }
    }
}

/// Table rows for `articles`
pub fn rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles.iter().map(ArticleRow::from).collect()
}

/// Execute news commands
pub async fn execute(
    args: &NewsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let client = super::connect(&config)?;

    match &args.command {
        NewsCommand::List {
            page,
            category,
            search,
            view_page,
        } => {
            let mut feed = NewsFeed::new(&config.pagination)?;
            feed.fetch(&client, *page).await?;
            if let Some(category) = category {
                feed.set_category(category);
            }
            if let Some(search) = search {
                feed.set_search(search);
            }
            feed.go_to_page(*view_page);

            if format == OutputFormat::Table && !feed.featured().is_empty() {
                println!("Featured");
                output::print_list(&rows(feed.featured()), format);
                println!();
            }
            output::print_list(&rows(feed.page_items()), format);
            output::print_page_footer(feed.summary(), &feed.page_bar(), format);

            if format == OutputFormat::Table {
                if let Some(next) = feed.next_batch() {
                    println!("More stories: newsdesk news list --page {}", next.page);
                }
            }
        }
        NewsCommand::Show { id } => {
            let id: ArticleId = id.parse()?;
            let mut article = client.get_news(&id).await?;

            match client.record_view(&id).await {
                Ok(Some(views)) => article.views = views,
                Ok(None) => {}
                Err(e) => warn!(article_id = %id, error = %e, "Failed to record view"),
            }

            let wanted = config.pagination.related_articles;
            let related = match client.news_by_category(&article.category, wanted + 1).await {
                Ok(articles) => articles
                    .into_iter()
                    .filter(|a| a.id != article.id)
                    .take(wanted)
                    .collect::<Vec<_>>(),
                Err(e) => {
                    warn!(category = %article.category, error = %e, "Failed to load related news");
                    Vec::new()
                }
            };

            match format {
                OutputFormat::Json => output::print_item(&article, format),
                OutputFormat::Table => print_article(&article, &related),
            }
        }
    }

    Ok(())
}

fn print_article(article: &Article, related: &[Article]) {
    println!("{}", article.title);
    println!();
    output::print_kv("Category", &article.category);
    output::print_kv("By", &article.author.name);
    output::print_kv("Published", &article.display_date().format("%B %-d, %Y").to_string());
    output::print_kv("Views", &article.views.to_string());
    println!();
    if !article.excerpt.is_empty() {
        println!("{}", article.excerpt);
        println!();
    }
    println!("{}", strip_html(&article.content));

    if !related.is_empty() {
        println!();
        println!("Related");
        for item in related {
            println!("  {}  {}", item.id, item.title);
        }
    }
}
