use rsscard::{extract_articles, respond, CardRequest, FeedSource, FetchError, FileSource};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("rsscard - Render an RSS/Atom feed as an SVG card");
    println!();
    println!("Usage: rsscard [OPTIONS] [FEED]");
    println!();
    println!("Reads the feed from FEED (a path or file:// URL) or stdin and writes SVG to stdout.");
    println!();
    println!("Options:");
    println!("  -h, --help            Show this help message");
    println!("  -q, --query <QUERY>   Card parameters as a query string (feed_url=..&count=..)");
    println!("  -c, --count <N>       Maximum number of articles (default: 5)");
    println!("  -t, --theme <NAME>    default, dark, radical or github (default: default)");
    println!("      --title <TEXT>    Card heading (default: Latest Articles)");
    println!("  -W, --width <PX>      Card width (default: 400)");
    println!("  -H, --height <PX>     Minimum card height (default: 200)");
    println!("      --json            Print the extracted articles as JSON instead of SVG");
    println!();
    println!("Set RUST_LOG=debug for diagnostics on stderr.");
    println!();
    println!("Example:");
    println!("  rsscard --theme dark --count 3 feed.xml > card.svg");
    println!("  curl -s https://example.com/feed.xml | rsscard > card.svg");
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    let value = value.unwrap_or_else(|| fail(&format!("{} requires a value", flag)));
    value
        .parse()
        .unwrap_or_else(|_| fail(&format!("invalid value for {}: {}", flag, value)))
}

fn parse_positive(flag: &str, value: Option<String>) -> u32 {
    match parse_number::<u32>(flag, value) {
        0 => fail(&format!("{} must be positive", flag)),
        n => n,
    }
}

/// Reads `-` from stdin and everything else from the file system.
fn cli_source(url: &str) -> Result<String, FetchError> {
    if url != "-" {
        return FileSource.fetch(url);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Err(FetchError::Transport("no input on stdin".to_string()));
    }
    Ok(buf)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut request = CardRequest::from_query("");
    let mut overrides: Vec<(String, Option<String>)> = Vec::new();
    let mut input: Option<String> = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-q" | "--query" => {
                let query = args.next().unwrap_or_else(|| fail("--query requires a value"));
                request = CardRequest::from_query(&query);
            }
            "--json" => json = true,
            "-c" | "--count" | "-t" | "--theme" | "--title" | "-W" | "--width" | "-H"
            | "--height" => overrides.push((arg.clone(), args.next())),
            "-" => input = Some(arg.clone()),
            other if other.starts_with('-') => fail(&format!("unknown option: {}", other)),
            _ => input = Some(arg.clone()),
        }
    }

    // Flags win over --query regardless of order.
    for (flag, value) in overrides {
        let config = &mut request.config;
        match flag.as_str() {
            "-c" | "--count" => config.max_articles = parse_number(&flag, value),
            "-W" | "--width" => config.width = parse_positive(&flag, value),
            "-H" | "--height" => config.height = parse_positive(&flag, value),
            "-t" | "--theme" => {
                config.theme = value.unwrap_or_else(|| fail(&format!("{} requires a value", flag)))
            }
            _ => config.title = value.unwrap_or_else(|| fail(&format!("{} requires a value", flag))),
        }
    }

    if let Some(path) = input {
        request.feed_url = Some(path);
    }
    if request.feed_url.is_none() {
        request.feed_url = Some("-".to_string());
    }

    if json {
        let url = request.feed_url.as_deref().unwrap_or("-");
        let text = cli_source(url).unwrap_or_else(|e| fail(&e.to_string()));
        let articles = extract_articles(&text, request.config.max_articles);
        match serde_json::to_string_pretty(&articles) {
            Ok(out) => println!("{}", out),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    let response = respond(&request, &cli_source);
    println!("{}", response.body);
    if !response.is_success() {
        std::process::exit(1);
    }
}
