//! Shelf CLI - command-line access to the book catalog

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use shelf_app::pages::{BookDetailPage, CatalogPage, PageState, ReadingListsPage};
use shelf_app::{Api, NewBook};
use shelf_kernel::Settings;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL, overriding configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Serve fallback data without the artificial delay
    #[arg(long, global = true)]
    no_delay: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit the book catalog
    #[command(subcommand)]
    Books(BookCommands),

    /// Manage a user's reading lists
    #[command(subcommand)]
    Lists(ListCommands),

    /// Read and write book reviews
    #[command(subcommand)]
    Reviews(ReviewCommands),

    /// Suggest books for a user
    Recommend {
        #[arg(long)]
        user: String,
    },
}

#[derive(Subcommand)]
enum BookCommands {
    /// List books, optionally filtered
    List {
        /// Only books in this genre
        #[arg(long)]
        genre: Option<String>,

        /// Match against title or author
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Show one book
    Get { id: String },

    /// Add a book to the catalog
    Create(CreateBookArgs),

    /// Remove a book from the catalog
    Delete { id: String },
}

#[derive(Args)]
struct CreateBookArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    author: String,
    #[arg(long, default_value = "")]
    genre: String,
    #[arg(long, default_value_t = 0.0)]
    rating: f32,
    #[arg(long, default_value_t = 0)]
    year: i32,
    #[arg(long, default_value = "")]
    isbn: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    cover: String,
}

#[derive(Subcommand)]
enum ListCommands {
    /// Show the user's reading lists
    List {
        #[arg(long)]
        user: String,
    },

    /// Create a reading list
    Create {
        #[arg(long)]
        user: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Append a book to a reading list
    AddBook {
        #[arg(long)]
        user: String,
        list: String,
        book: String,
    },

    /// Delete a reading list
    Delete {
        #[arg(long)]
        user: String,
        id: String,
    },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Show reviews of a book
    List { book: String },

    /// Review a book
    Add {
        book: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load shelf settings")?;
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }
    if cli.no_delay {
        settings.api.mock_delay_ms = 0;
    }
    shelf_telemetry::init(&settings.telemetry)?;
    tracing::debug!(env = ?settings.environment, api = %settings.api.base_url, "shelf cli starting");

    let api = Api::from_settings(&settings.api).context("failed to build API client")?;

    let output = match cli.command {
        Commands::Books(command) => run_books(api, command).await?,
        Commands::Lists(command) => run_lists(api, command).await?,
        Commands::Reviews(command) => run_reviews(api, command).await?,
        Commands::Recommend { user } => serde_json::to_value(api.recommendations(&user).await?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run_books(api: Api, command: BookCommands) -> Result<Value> {
    let mut page = CatalogPage::new(api.clone());
    match command {
        BookCommands::List { genre, query } => {
            page.load().await;
            check(&page.state)?;
            page.filter.genre = genre;
            page.filter.query = query;
            Ok(serde_json::to_value(page.visible())?)
        }
        BookCommands::Get { id } => Ok(serde_json::to_value(api.get_book(&id).await?)?),
        BookCommands::Create(args) => {
            let input = NewBook {
                title: args.title,
                author: args.author,
                genre: args.genre,
                rating: args.rating,
                published_year: args.year,
                description: args.description,
                cover_image: args.cover,
                isbn: args.isbn,
            };
            let book = page.create(input).await;
            check(&page.state)?;
            Ok(serde_json::to_value(book)?)
        }
        BookCommands::Delete { id } => {
            page.delete(&id).await;
            check(&page.state)?;
            Ok(serde_json::json!({ "deleted": id }))
        }
    }
}

async fn run_lists(api: Api, command: ListCommands) -> Result<Value> {
    match command {
        ListCommands::List { user } => {
            let mut page = ReadingListsPage::new(api, user);
            page.load().await;
            check(&page.state)?;
            Ok(serde_json::to_value(&page.state.data)?)
        }
        ListCommands::Create {
            user,
            name,
            description,
        } => {
            let mut page = ReadingListsPage::new(api, user);
            let list = page.create(&name, &description).await;
            check(&page.state)?;
            Ok(serde_json::to_value(list)?)
        }
        ListCommands::AddBook { user, list, book } => {
            let mut page = ReadingListsPage::new(api, user);
            page.load().await;
            check(&page.state)?;
            let updated = page.add_book(&list, &book).await;
            check(&page.state)?;
            Ok(serde_json::to_value(updated)?)
        }
        ListCommands::Delete { user, id } => {
            let mut page = ReadingListsPage::new(api, user);
            page.delete(&id).await;
            check(&page.state)?;
            Ok(serde_json::json!({ "deleted": id }))
        }
    }
}

async fn run_reviews(api: Api, command: ReviewCommands) -> Result<Value> {
    match command {
        ReviewCommands::List { book } => Ok(serde_json::to_value(api.list_reviews(&book).await?)?),
        ReviewCommands::Add {
            book,
            user,
            rating,
            comment,
        } => {
            let mut page = BookDetailPage::new(api, book, user);
            let review = page.submit_review(rating, &comment).await;
            check(&page.reviews)?;
            Ok(serde_json::to_value(review)?)
        }
    }
}

/// Turn a page's error message into a command failure.
fn check<T>(state: &PageState<T>) -> Result<()> {
    if let Some(message) = &state.error {
        bail!("{}", message);
    }
    Ok(())
}
