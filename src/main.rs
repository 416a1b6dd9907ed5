use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use wordpane::controller::{PageController, UploadOutcome};
use wordpane::net::api::{ApiClient, ApiError};
use wordpane::state::pager::PageMove;
use wordpane::ui::console::ConsoleUi;
use wordpane::ui::surface::{PickedFile, row_cells};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("io failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "wordpane", about = "Paged word-statistics client")]
struct Cli {
    #[arg(long, env = "WORDPANE_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect and grow the text collection.
    Texts(TextsCommand),
    /// Interactive paging session on stdin.
    Browse {
        /// Text to open initially.
        text_id: Option<String>,
    },
    /// Keep the text list in sync, printing it whenever it changes.
    Poll {
        #[arg(long, default_value_t = 5)]
        interval_secs: u64,
    },
}

#[derive(Args, Debug)]
struct TextsCommand {
    #[command(subcommand)]
    command: TextsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TextsSubcommand {
    /// List every uploaded text.
    List,
    /// Upload a plain-text file.
    Upload { path: PathBuf },
    /// Dump one window of word statistics.
    Words {
        text_id: String,
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = 50)]
        limit: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let api = ApiClient::new(cli.base_url);

    match cli.command {
        Command::Texts(texts) => run_texts(api, texts).await,
        Command::Browse { text_id } => run_browse(api, text_id).await,
        Command::Poll { interval_secs } => run_poll(api, interval_secs).await,
    }
}

async fn run_texts(api: ApiClient, texts: TextsCommand) -> Result<(), CliError> {
    match texts.command {
        TextsSubcommand::List => {
            for text in api.list_texts().await? {
                let words = text
                    .length
                    .map_or_else(|| "?".to_owned(), |count| count.to_string());
                let preview: String = text.text_str.chars().take(40).collect();
                println!("{}\t{words} words\t{preview}", text.id);
            }
            Ok(())
        }
        TextsSubcommand::Upload { path } => {
            let shared = PageController::new(api, ConsoleUi::new()).into_shared();
            let file = picked_file(&path)?;
            match PageController::upload(&shared, Some(file)).await? {
                UploadOutcome::Accepted { refresh } => {
                    let _ = refresh.await;
                    if let Some(id) = shared.lock().await.text_id() {
                        println!("uploaded: {id}");
                    }
                }
                UploadOutcome::Rejected => {}
            }
            Ok(())
        }
        TextsSubcommand::Words {
            text_id,
            offset,
            limit,
        } => {
            for row in api.fetch_rows(&text_id, offset, limit).await? {
                println!("{}", row_cells(&row).join("\t"));
            }
            Ok(())
        }
    }
}

async fn run_browse(api: ApiClient, text_id: Option<String>) -> Result<(), CliError> {
    let shared = PageController::new(api, ConsoleUi::new()).into_shared();

    {
        let mut ctl = shared.lock().await;
        ctl.refresh_options().await?;
        if let Some(id) = text_id {
            ctl.ui_mut().set_selected(id.clone());
            ctl.select_text(id).await?;
        }
    }

    println!("commands: n / p / use <id> / upload <path> / refresh / q");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("n") => shared.lock().await.change_page(PageMove::Forward).await?,
            Some("p") => shared.lock().await.change_page(PageMove::Back).await?,
            Some("use") => {
                if let Some(id) = parts.next() {
                    let mut ctl = shared.lock().await;
                    ctl.ui_mut().set_selected(id);
                    ctl.select_text(id).await?;
                } else {
                    eprintln!("usage: use <id>");
                }
            }
            Some("upload") => {
                if let Some(path) = parts.next() {
                    let file = picked_file(Path::new(path))?;
                    if let UploadOutcome::Accepted { refresh } =
                        PageController::upload(&shared, Some(file)).await?
                    {
                        let _ = refresh.await;
                    }
                } else {
                    eprintln!("usage: upload <path>");
                }
            }
            Some("refresh") => shared.lock().await.refresh_options().await?,
            Some("q") => break,
            Some(other) => eprintln!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

async fn run_poll(api: ApiClient, interval_secs: u64) -> Result<(), CliError> {
    let mut ctl = PageController::new(api, ConsoleUi::new());
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    loop {
        ticker.tick().await;
        ctl.refresh_options().await?;
    }
}

/// Stand-in for the page's file picker: the MIME type comes from the file
/// extension, so anything but `.txt` exercises the uploader's rejection
/// path the same way a wrong picker choice would.
fn picked_file(path: &Path) -> Result<PickedFile, CliError> {
    let bytes = fs::read(path)?;
    let name = path.file_name().map_or_else(
        || "upload.txt".to_owned(),
        |name| name.to_string_lossy().into_owned(),
    );
    let mime = if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
    {
        "text/plain"
    } else {
        "application/octet-stream"
    };
    Ok(PickedFile {
        name,
        mime: mime.to_owned(),
        bytes,
    })
}
