use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Item entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemCommands {
    /// List items, paginated, optionally filtered by search text.
    List {
        /// Page to fetch (1-based).
        #[arg(long)]
        page: Option<u32>,
        /// Filter by title/description search text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a single item by id.
    Get { id: i64 },
    /// Create an item (admin).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value_t = 0)]
        price: i64,
        #[arg(long, default_value_t = 0)]
        quantity: i64,
        #[arg(long, default_value = "Uncategorized")]
        category: String,
    },
    /// Edit item fields (admin). Quantity moves through `set-quantity` only.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Adjust quantity (manager or admin).
    SetQuantity { id: i64, quantity: i64 },
    /// Delete an item (admin, asks for confirmation).
    Delete { id: i64 },
    /// Bulk-import items from a CSV file (admin).
    Import(ImportArgs),
    /// Write the CSV import template.
    Template {
        /// Destination path.
        #[arg(default_value = "template.csv")]
        path: PathBuf,
    },
    /// Interactive paginated browser with debounced search.
    Browse {
        /// Initial search text.
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// CSV file with title, description, price, quantity, category columns.
    pub file: PathBuf,
    /// Validate and preview without submitting.
    #[arg(long)]
    pub dry_run: bool,
}
