//! `categoria` -- line-oriented driver for the category screen.
//!
//! A minimal stand-in for the dashboard shell: maps typed commands onto
//! the screen operations and renders the resulting state as plain text.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default | Description |
//! |-------------------------|----------|---------|-------------------------------------|
//! | `INTRANET_API_BASE_URL` | no | `http://localhost:8090/url/categoria` | Category endpoint base |
//! | `RUST_LOG`              | no | --      | `env_logger` filter |

use std::io::{self, Write};

use intranet_categoria::config::ClientConfig;
use intranet_categoria::domain::types::CategoryId;
use intranet_categoria::repository::RestRepository;
use intranet_categoria::screen::categories::{
    CategoryScreen, DELETE_CANCEL_LABEL, DELETE_CONFIRM_LABEL, DELETE_PROMPT_TEXT,
    DELETE_PROMPT_TITLE, LoadState,
};
use intranet_categoria::screen::notify::Level;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Using category endpoint {}", config.api_base_url);

    let repo = RestRepository::new(&config.api_base_url);
    let mut screen = CategoryScreen::new();

    screen.load(&repo).await;
    render(&screen);

    loop {
        let Some(line) = prompt("> ") else { break };
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let rest = tokens.collect::<Vec<_>>().join(" ");

        match command {
            "q" | "salir" => break,
            "l" | "lista" => screen.load(&repo).await,
            "b" | "busca" => screen.search(&repo, &rest).await,
            "n" => screen.set_page(screen.page().saturating_add(1)),
            "p" => screen.set_page(screen.page().saturating_sub(1)),
            "f" => match rest.parse::<usize>() {
                Ok(rows) => screen.set_rows_per_page(rows),
                Err(_) => println!("Uso: f <filas>"),
            },
            "a" | "agrega" => {
                screen.start_create();
                if edit_draft(&mut screen) {
                    screen.save(&repo).await;
                } else {
                    screen.cancel_edit();
                }
            }
            "e" | "edita" => match parse_id(&rest) {
                Some(id) => {
                    if !screen.start_edit(id) {
                        println!("No hay categoría con id {id}");
                        continue;
                    }
                    if edit_draft(&mut screen) {
                        screen.save(&repo).await;
                    } else {
                        screen.cancel_edit();
                    }
                }
                None => println!("Uso: e <id>"),
            },
            "d" | "elimina" => match parse_id(&rest) {
                Some(id) => {
                    screen.request_delete(id);
                    if confirm_delete_prompt() {
                        screen.confirm_delete(&repo).await;
                    } else {
                        screen.decline_delete();
                    }
                }
                None => println!("Uso: d <id>"),
            },
            _ => help(),
        }

        drain_notifications(&mut screen);
        render(&screen);
    }
}

fn render(screen: &CategoryScreen) {
    match screen.load_state() {
        LoadState::Loading => println!("Cargando..."),
        LoadState::Failed(message) => println!("{message}"),
        LoadState::Ready => {
            println!("{:>4}  {:<24}  {}", "ID", "Nombre", "Descripción");
            for category in screen.visible_rows() {
                println!(
                    "{:>4}  {:<24}  {}",
                    category.id, category.name, category.description
                );
            }
            println!("{}", screen.pagination_label());
        }
    }
}

fn drain_notifications(screen: &mut CategoryScreen) {
    for notification in screen.take_notifications() {
        let tag = match notification.level {
            Level::Success => "OK",
            Level::Error => "ERROR",
        };
        println!("[{tag}] {} {}", notification.title, notification.message);
    }
}

/// Prompt for both draft fields. An empty answer keeps the shown value,
/// a lone `.` abandons the edit. Returns whether the draft should be
/// submitted.
fn edit_draft(screen: &mut CategoryScreen) -> bool {
    let Some(draft) = screen.draft_mut() else {
        return false;
    };

    match read_field("Nombre", &draft.name) {
        Some(name) => draft.name = name,
        None => return false,
    }
    match read_field("Descripción", &draft.description) {
        Some(description) => draft.description = description,
        None => return false,
    }
    true
}

fn read_field(label: &str, current: &str) -> Option<String> {
    let answer = prompt(&format!("{label} [{current}]: "))?;
    let answer = answer.trim();
    match answer {
        "." => None,
        "" => Some(current.to_string()),
        other => Some(other.to_string()),
    }
}

fn confirm_delete_prompt() -> bool {
    println!("{DELETE_PROMPT_TITLE} {DELETE_PROMPT_TEXT}");
    let answer = prompt(&format!(
        "{DELETE_CONFIRM_LABEL} (s) / {DELETE_CANCEL_LABEL} (n): "
    ));
    matches!(answer.as_deref().map(str::trim), Some("s") | Some("S"))
}

/// Read one line from stdin, `None` on end of input.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn parse_id(value: &str) -> Option<CategoryId> {
    value.trim().parse::<i32>().ok().map(CategoryId::new)
}

fn help() {
    println!("Comandos:");
    println!("  l               recarga la lista");
    println!("  b <texto>       busca por nombre");
    println!("  a               registra una nueva categoría");
    println!("  e <id>          edita una categoría");
    println!("  d <id>          elimina una categoría");
    println!("  n / p           página siguiente / anterior");
    println!("  f <filas>       filas por página");
    println!("  q               salir");
}
