//! Commands for an employee's own articles.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use newsdesk_core::error::AppError;
use newsdesk_core::types::{ArticleId, FieldErrors};
use newsdesk_entity::article::ArticleDraft;
use newsdesk_service::MyArticles;

use super::news::rows;
use crate::output::{self, OutputFormat};

/// Arguments for article commands
#[derive(Debug, Args)]
pub struct ArticlesArgs {
    /// Article subcommand
    #[command(subcommand)]
    pub command: ArticlesCommand,
}

/// Form fields shared by submit and edit
#[derive(Debug, Args)]
pub struct DraftFields {
    /// Headline
    #[arg(short, long)]
    pub title: Option<String>,
    /// Summary shown in lists
    #[arg(short, long)]
    pub excerpt: Option<String>,
    /// Category name
    #[arg(short, long)]
    pub category: Option<String>,
    /// Cover image URL
    #[arg(long)]
    pub image_url: Option<String>,
    /// File holding the HTML body
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

/// Article subcommands
#[derive(Debug, Subcommand)]
pub enum ArticlesCommand {
    /// List the articles you wrote
    Mine {
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Search your articles
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Submit a new article for review
    Submit(DraftFields),
    /// Edit one of your articles
    Edit {
        /// Article ID
        id: String,
        /// Fields to change
        #[command(flatten)]
        fields: DraftFields,
    },
    /// Delete one of your articles
    Delete {
        /// Article ID
        id: String,
        /// Skip confirmation
        #[arg(long)]
        yes: bool,
    },
}

/// Execute article commands
pub async fn execute(
    args: &ArticlesArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let client = super::connect(&config)?;

    match &args.command {
        ArticlesCommand::Mine {
            page,
            search,
            category,
        } => {
            let mut mine = MyArticles::new(&config.pagination)?;
            if let Some(search) = search {
                mine.set_search(search);
            }
            if let Some(category) = category {
                mine.set_category(category);
            }
            mine.go_to_page(*page);
            mine.fetch(&client).await?;

            output::print_list(&rows(mine.page_items()), format);
            output::print_page_footer(mine.summary(), &mine.page_bar(), format);
        }
        ArticlesCommand::Submit(fields) => {
            let draft = ArticleDraft {
                title: super::text_or_prompt(&fields.title, "Title")?,
                excerpt: super::text_or_prompt(&fields.excerpt, "Excerpt")?,
                category: super::text_or_prompt(&fields.category, "Category")?,
                image_url: fields.image_url.clone(),
                content: read_content(fields).await?.unwrap_or_default(),
            };
            report(draft.validate_for_submission())?;

            let message = client.create_news(&draft).await?;
            output::print_success(message.as_deref().unwrap_or("Article submitted for review"));
            output::print_kv("Words", &draft.word_count().to_string());
        }
        ArticlesCommand::Edit { id, fields } => {
            let id: ArticleId = id.parse()?;
            let current = client.get_news(&id).await?;

            let draft = ArticleDraft {
                title: fields.title.clone().unwrap_or(current.title),
                excerpt: fields.excerpt.clone().unwrap_or(current.excerpt),
                category: fields.category.clone().unwrap_or(current.category),
                image_url: fields.image_url.clone().or(current.image_url),
                content: read_content(fields).await?.unwrap_or(current.content),
            };
            report(draft.validate_for_update())?;

            let message = client.update_news(&id, &draft).await?;
            output::print_success(message.as_deref().unwrap_or("Article updated"));
        }
        ArticlesCommand::Delete { id, yes } => {
            let id: ArticleId = id.parse()?;
            if !yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete article '{id}'?"))
                    .default(false)
                    .interact()
                    .map_err(super::input_error)?;
                if !confirmed {
                    output::print_warning("Aborted");
                    return Ok(());
                }
            }

            client.delete_news(&id).await?;
            output::print_success(&format!("Article '{id}' deleted"));
        }
    }

    Ok(())
}

async fn read_content(fields: &DraftFields) -> Result<Option<String>, AppError> {
    match &fields.content_file {
        Some(path) => Ok(Some(tokio::fs::read_to_string(path).await?)),
        None => Ok(None),
    }
}

fn report(result: Result<(), FieldErrors>) -> Result<(), AppError> {
    if let Err(errors) = result {
        for (field, message) in errors.iter() {
            output::print_error(&format!("{field}: {message}"));
        }
        return Err(errors.into());
    }
    Ok(())
}
