use catalog_client::render::{HELP, render_form, render_list};
use catalog_client::{CatalogApi, CatalogView, Command, DEFAULT_API_URL, HttpCatalogApi, Notifier, TerminalNotifier};
use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog-client", version, about = "Browse and edit the product catalog")]
struct Args {
    /// Products collection URL
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Per-request timeout
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let api = HttpCatalogApi::with_timeout(&args.api_url, Duration::from_secs(args.timeout_secs))?;
    tracing::info!(api_url = %api.base_url(), "Starting catalog client");

    let mut view = CatalogView::new(api, TerminalNotifier);
    if view.load().await.is_ok() {
        show(&view);
    }
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                TerminalNotifier.notify(&e.to_string());
                continue;
            }
        };

        // Failures were already reported through the notifier.
        match command {
            Command::List => {
                if view.load().await.is_ok() {
                    show(&view);
                }
            }
            Command::Name(name) => {
                view.set_name(name);
                println!("{}", render_form(view.form()));
            }
            Command::Price(price) => {
                view.set_price(price);
                println!("{}", render_form(view.form()));
            }
            Command::Submit => {
                if view.submit().await.is_ok() {
                    show(&view);
                }
            }
            Command::Edit(id) => {
                if view.edit(id).is_ok() {
                    println!("{}", render_form(view.form()));
                }
            }
            Command::Delete(id) => {
                if view.delete(id).await.is_ok() {
                    show(&view);
                }
            }
            Command::New => {
                view.new_product();
                println!("{}", render_form(view.form()));
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn show<A: CatalogApi, N: Notifier>(view: &CatalogView<A, N>) {
    println!("{}", render_list(view.products()));
    println!("{}", render_form(view.form()));
}
