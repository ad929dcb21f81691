//! Interactive prompt loop
//!
//! Reads URLs from stdin one at a time and prints a report for each. Input
//! reading is blocking; only one request is ever in flight.

use pageprobe::{FetchOptions, RenderOptions};
use std::io::{self, Write};

const EXIT_COMMANDS: &[&str] = &["exit", "quit", "q"];
const HELP_COMMANDS: &[&str] = &["help", "?"];

/// Run the prompt loop until the user exits or stdin closes.
pub async fn run(fetch_options: &FetchOptions, render_options: &RenderOptions) {
    print_welcome();

    loop {
        let Some(input) = prompt("Enter a URL to fetch (or 'exit' to quit): ") else {
            break;
        };
        let input = input.trim().to_string();

        if input.is_empty() {
            continue;
        }
        if is_exit_command(&input) {
            break;
        }
        if is_help_command(&input) {
            print_help();
            continue;
        }

        let Some(url) = validate_url(&input) else {
            continue;
        };

        crate::fetch_and_report(&url, fetch_options, render_options).await;
        println!("\n{}\n", "-".repeat(50));
    }

    println!("Bye!");
}

/// Print a prompt and read one line; None when stdin is closed.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            eprintln!("Error reading input: {e}");
            None
        }
    }
}

fn is_exit_command(input: &str) -> bool {
    EXIT_COMMANDS.contains(&input.to_lowercase().as_str())
}

fn is_help_command(input: &str) -> bool {
    HELP_COMMANDS.contains(&input.to_lowercase().as_str())
}

/// Interactive URL validation: API hosts get https:// silently, other
/// scheme-less input asks first, input with no domain is rejected.
fn validate_url(input: &str) -> Option<String> {
    if !input.contains('.') {
        println!("Error: URL must contain a domain name");
        return None;
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        return Some(input.to_string());
    }

    // API endpoints always go over https, no need to ask
    if input.contains("api.") {
        let url = format!("https://{input}");
        println!("Using URL: {url}");
        return Some(url);
    }

    let answer = prompt("No scheme given. Use https://? (y/n): ")?;
    let answer = answer.trim().to_lowercase();
    if answer == "y" || answer == "yes" {
        let url = format!("https://{input}");
        println!("Using URL: {url}");
        Some(url)
    } else {
        println!("Please enter a full URL including the scheme (https://...)");
        None
    }
}

fn print_welcome() {
    println!("=== PAGEPROBE ===");
    println!("Summarizes web pages and JSON API responses.");
    println!();
    println!("Optional environment variables:");
    println!("  API_AUTH_TOKEN - OAuth bearer token for API requests");
    println!("  API_ORG_ID     - organization id header");
    println!();
    println!("Commands:");
    println!("  exit, quit, q - leave the program");
    println!("  help, ?       - show usage");
    println!("{}", "=".repeat(50));
}

fn print_help() {
    println!("\n=== HELP ===");
    println!("1. Enter the URL of an API endpoint or a regular page");
    println!("2. API URLs (containing 'api.') are fetched over https automatically");
    println!("3. Regular URLs can be entered without a scheme");
    println!("4. Auth headers are taken from the environment at startup");
    println!();
    println!("Examples:");
    println!("  https://api.example.com/v1/pages?slug=intro");
    println!("  example.com");
    println!("  https://github.com");
    println!("{}", "-".repeat(50));
}
