use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "echo-cli")]
#[command(about = "Client for the diagnostic echo server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request the next code of a status sequence (e.g. 200-404-500)
    Code {
        sequence: String,
        /// Restart the cycle with this sequence
        #[arg(long)]
        init: bool,
        /// Send the sequence in the x-echo-code header instead of the query
        #[arg(long)]
        header: bool,
    },
    /// Echo the server's current time
    Time,
    /// Echo the request headers
    Headers,
    /// Echo a request body
    Body {
        text: Option<String>,
    },
    /// Fetch the welcome message
    Welcome,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Code {
            sequence,
            init,
            header,
        } => {
            let mut query: Vec<(&str, String)> = Vec::new();
            if !header {
                query.push(("echo_code", sequence.clone()));
            }
            if init {
                query.push(("init", "1".to_string()));
            }
            let mut req = client.get(format!("{}/", base)).query(&query);
            if header {
                req = req.header("x-echo-code", sequence);
            }
            req
        }
        Commands::Time => client.get(format!("{}/?echo_time", base)),
        Commands::Headers => client.get(format!("{}/?echo_env", base)),
        Commands::Body { text } => client
            .post(format!("{}/?echo_body", base))
            .body(text.unwrap_or_default()),
        Commands::Welcome => client.get(format!("{}/", base)),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        println!("{}", status);
    } else {
        eprintln!("{}", status);
    }
    println!("{}", body.trim_end());
    Ok(())
}
