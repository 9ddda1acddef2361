//! LinguaRelay Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::utils::command::BotCommands;
use tracing::{info, warn, error};

use LinguaRelay::{
    config::Settings,
    utils::logging,
    database::{DatabaseService, DatabaseConfig},
    models::LanguageDefaults,
    services::ServiceFactory,
    handlers::{
        Command,
        handle_command,
        handle_group_message,
        telegram::{command_invocation, incoming_message},
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", LinguaRelay::info());

    // Initialize database
    info!("Connecting to database...");
    let defaults = LanguageDefaults::new(
        &settings.translation.default_source_langs,
        &settings.translation.default_target_lang,
    );
    let database = DatabaseService::connect(&DatabaseConfig::from(&settings.database), defaults).await?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(bot.clone(), &settings, database.clone())?;

    let health = services.health_check().await;
    if !health.is_healthy() {
        for issue in health.get_issues() {
            warn!(issue = %issue, "Service health issue");
        }
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let services_arc = Arc::new(services);

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![services_arc])
        .default_handler(|upd| async move {
            tracing::trace!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("LinguaRelay bot is ready, starting polling...");

    dispatcher.dispatch().await;

    database.close().await;
    info!("LinguaRelay bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .branch(
            // Handle commands; admin-only commands from anyone else are dropped
            dptree::entry()
                .filter_command::<Command>()
                .filter(is_permitted)
                .endpoint(handle_commands)
        )
        .branch(
            // Handle plain group text; commands never reach translation
            dptree::filter(|msg: Message| msg.text().is_some_and(|text| !text.starts_with('/')))
                .endpoint(handle_messages)
        )
}

/// Admin allow-list check for privileged commands
fn is_permitted(msg: Message, cmd: Command, services: Arc<ServiceFactory>) -> bool {
    services.auth.permits(&msg, &cmd)
}

/// Handle bot commands
async fn handle_commands(
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let Some(invocation) = command_invocation(&msg) else {
        return Ok(());
    };

    if let Err(e) = handle_command(&services, &invocation, cmd).await {
        error!(
            error = %e,
            severity = %e.severity(),
            recoverable = e.is_recoverable(),
            group_id = invocation.group_id,
            "Error handling command"
        );
    }

    Ok(())
}

/// Handle regular group messages
async fn handle_messages(
    msg: Message,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let Some(incoming) = incoming_message(&msg) else {
        return Ok(());
    };

    if let Err(e) = handle_group_message(&services, &incoming).await {
        error!(
            error = %e,
            severity = %e.severity(),
            recoverable = e.is_recoverable(),
            group_id = incoming.group_id,
            "Error handling message"
        );
    }

    Ok(())
}
