//! Terminal front-end for the menu of the day widget.
//!
//! Renders the page to stdout and reads one command per line from stdin.

use std::time::Instant;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use today_menus::page::Control;
use today_menus::view::{Action, Key};
use today_menus::{Config, InputEvent, MenuSource, TextPage, ViewController};

const HELP: &str = "Commands: prev | next | today | all | key <name> | click <x> | touch <x> | help | quit";

/// One line of user input.
#[derive(Debug, PartialEq)]
enum Command {
    Input(InputEvent),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let arg = parts.next();

    let command = match (head, arg) {
        ("quit" | "q" | "exit", None) => Command::Quit,
        ("help" | "?", None) => Command::Help,
        ("prev" | "previous", None) => Command::Input(InputEvent::Control(Control::Previous)),
        ("next", None) => Command::Input(InputEvent::Control(Control::Next)),
        ("all", None) => Command::Input(InputEvent::Control(Control::All)),
        ("today", None) => Command::Input(InputEvent::Key(Key::Char('t'))),
        ("key", Some(name)) => Command::Input(InputEvent::Key(Key::parse(name))),
        ("click", Some(x)) => Command::Input(InputEvent::Click {
            x: x.parse().ok()?,
            at: Instant::now(),
        }),
        ("touch", Some(x)) => Command::Input(InputEvent::Touch {
            x: x.parse().ok()?,
            at: Instant::now(),
        }),
        (key, None) => Command::Input(InputEvent::Key(Key::parse(key))),
        _ => return None,
    };
    Some(command)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting menu of the day");
    tracing::info!("API URL: {}", config.api_url);
    if let Some(path) = &config.offline_file {
        tracing::info!("Offline file: {:?}", path);
    }

    let source = MenuSource::from_config(&config)?;

    let page = TextPage::new(config.viewport_width, &config.page_location());
    let mut controller = ViewController::new(config, page);

    if let Err(err) = controller.initialize(&source).await {
        tracing::error!("Menus unavailable: {}", err);
    }
    println!("{}", controller.page());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_command(line.trim()) {
            Some(Command::Quit) => break,
            Some(Command::Help) | None => {
                println!("{}", HELP);
                continue;
            }
            Some(Command::Input(event)) => event,
        };

        match controller.handle(event) {
            Some(Action::ShowAll) => {
                println!("Abriendo {}", controller.page().location());
                break;
            }
            Some(_) => println!("{}", controller.page()),
            None => tracing::debug!("Input ignored"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_commands() {
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(
            parse_command("next"),
            Some(Command::Input(InputEvent::Control(Control::Next)))
        );
        assert_eq!(
            parse_command("key ArrowLeft"),
            Some(Command::Input(InputEvent::Key(Key::ArrowLeft)))
        );
        assert_eq!(
            parse_command("j"),
            Some(Command::Input(InputEvent::Key(Key::Char('j'))))
        );
    }

    #[test]
    fn test_parse_pointer_commands() {
        assert!(matches!(
            parse_command("click 80.5"),
            Some(Command::Input(InputEvent::Click { x, .. })) if x == 80.5
        ));
        assert!(matches!(
            parse_command("touch 3"),
            Some(Command::Input(InputEvent::Touch { x, .. })) if x == 3.0
        ));
        assert_eq!(parse_command("click left"), None);
        assert_eq!(parse_command(""), None);
    }
}
