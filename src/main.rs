use std::sync::Arc;

use eyre::{Context, Result};
use prattle::app::app::InitProps;
use prattle::app::services::{ActionService, EventService};
use prattle::app::{App, destruct_terminal_for_panic};
use prattle::backend::new_backend;
use prattle::cli::Command;
use prattle::config::{Configuration, init_logger, verbose};
use prattle::models::action::Action;
use prattle::models::{ArcIdGenerator, UuidGenerator};
use prattle::registry::ConversationRegistry;
use prattle::session::ChatSession;
use prattle::storage::new_storage;
use tokio::{sync::mpsc, task};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    Configuration::init(config.clone())?;
    init_logger(&config.log)?;
    verbose!("[+] Logger initialized");

    verbose!("[+] Initializing backend...");
    let backend = new_backend(&config.backend)?;

    verbose!("[+] Initializing storage...");
    let storage = new_storage(&config.storage)
        .await
        .wrap_err("initializing storage")?;
    verbose!("[+] Storage initialized");

    let id_gen: ArcIdGenerator = Arc::new(UuidGenerator);

    verbose!("[+] Loading conversations...");
    let registry = ConversationRegistry::bootstrap(storage.clone(), id_gen.clone()).await;
    let session = ChatSession::new(storage.clone());

    let init_props = InitProps {
        conversations: registry.conversations().to_vec(),
        current: registry.current().map(|c| c.id().to_string()),
    };
    verbose!("[+] Loaded {} conversations", init_props.conversations.len());

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();

    let mut events = EventService::new();

    let mut task_set = task::JoinSet::new();
    let token = CancellationToken::new();

    let mut action_service = ActionService::new(
        Arc::new(events.event_tx()),
        action_rx,
        action_tx.clone(),
        backend,
        registry,
        session,
        id_gen,
        token.clone(),
    );

    task_set.spawn(async move { action_service.start().await });

    let mut app = App::new(action_tx, &mut events, token.clone(), init_props);

    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();

    task_set.abort_all();
    while let Some(res) = task_set.join_next().await {
        match res {
            Ok(_) => {}
            Err(err) => log::error!("Task error: {}", err),
        }
    }

    Ok(())
}
