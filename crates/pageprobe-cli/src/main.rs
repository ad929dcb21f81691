//! Pageprobe CLI - fetch a URL and print a summary of what came back

mod repl;

use clap::Parser;
use pageprobe::{classify_and_render, fetch, FetchOptions, LinkTextPolicy, RenderOptions};
use tracing_subscriber::EnvFilter;

/// Pageprobe - summarize web pages and JSON API responses
#[derive(Parser, Debug)]
#[command(name = "pageprobe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to fetch; starts the interactive prompt when omitted
    url: Option<String>,

    /// Custom User-Agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Maximum number of links shown for an HTML page
    #[arg(long, default_value_t = 10)]
    max_links: usize,

    /// Drop links with no visible text instead of showing a placeholder
    #[arg(long)]
    skip_empty_links: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let fetch_options = FetchOptions {
        user_agent: cli.user_agent,
        auth_token: env_or_warn("API_AUTH_TOKEN", "API requests will use anonymous access"),
        org_id: env_or_warn("API_ORG_ID", "some API requests may require this header"),
    };

    let render_options = RenderOptions {
        max_links: cli.max_links,
        link_text_policy: if cli.skip_empty_links {
            LinkTextPolicy::Skip
        } else {
            LinkTextPolicy::Placeholder
        },
        ..Default::default()
    };

    match cli.url {
        Some(url) => {
            let Some(url) = normalize_url(&url) else {
                eprintln!("Error: URL must contain a domain name");
                std::process::exit(1);
            };
            if !fetch_and_report(&url, &fetch_options, &render_options).await {
                std::process::exit(1);
            }
        }
        None => {
            repl::run(&fetch_options, &render_options).await;
        }
    }
}

/// Read an env var, printing a note when it is unset.
fn env_or_warn(name: &str, consequence: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            eprintln!("Note: {name} is not set; {consequence}");
            None
        }
    }
}

/// Prepend https:// when the scheme is missing; reject input with no domain.
fn normalize_url(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() || !input.contains('.') {
        return None;
    }
    if input.starts_with("http://") || input.starts_with("https://") {
        Some(input.to_string())
    } else {
        Some(format!("https://{input}"))
    }
}

/// Fetch one URL and print its report. Returns false on fetch failure.
async fn fetch_and_report(
    url: &str,
    fetch_options: &FetchOptions,
    render_options: &RenderOptions,
) -> bool {
    println!("Fetching: {url}");
    let response = match fetch(url, fetch_options).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {e}");
            return false;
        }
    };

    println!("Status: {}", response.status_code);
    println!("Elapsed: {:.2?}", response.elapsed);
    println!("Content-Type: {}", response.content_type);
    if let Some(length) = response.content_length {
        println!("Content-Length: {length} bytes");
    }
    if response.truncated {
        println!("Note: body read timed out, showing partial content");
    }
    println!();
    println!(
        "{}",
        classify_and_render(
            &response.content_type,
            &response.body,
            &response.url,
            render_options,
        )
    );
    true
}
