use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pagemart")]
#[command(author, version, about = "Normalize marketplace product pages into product records", long_about = None)]
#[command(after_help = r#"Examples:
  pagemart normalize page.html                      Normalize a saved product page
  curl -s <product-url> | pagemart normalize -      Normalize fetched HTML from stdin
  pagemart id "https://www.aliexpress.com/item/1005006574626248.html"
  pagemart canon "https://www.aliexpress.com/item/123.html?spm=a2g0o.home"

Every normalize invocation succeeds: missing fields fall back to defaults,
and a page the pipeline cannot process at all yields the fixed fallback
record. Fetching pages is out of scope - pair with curl or your own fetcher.
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a product page into a JSON product record
    #[command(after_help = r#"Examples:
  pagemart normalize page.html              Pretty-printed record
  pagemart normalize page.html --compact    Single-line JSON for piping
  cat page.html | pagemart normalize -      Read the page from stdin
"#)]
    Normalize {
        /// HTML file to read, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Emit compact single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Derive the stable cart identifier for a product URL
    Id {
        /// Product URL (defaults to the demo product page)
        #[arg(value_name = "URL")]
        url: Option<String>,
    },

    /// Canonicalize a product URL to origin + path (cache-key form)
    Canon {
        /// Product URL
        #[arg(value_name = "URL")]
        url: String,
    },
}
