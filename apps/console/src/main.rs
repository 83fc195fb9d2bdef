use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{BusinessApi, HttpBusinessApi};
use form_controller::{
    initialize, layout::FormLayout, BoundPage, DetailCard, FlowOutcome, MemoryPage, PageMode,
    PageSurface,
};
use shared::{domain::BusinessId, protocol::ListQuery};
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use terminal::TerminalPage;

#[derive(Parser, Debug)]
#[command(about = "Drive the business directory forms against a running backend")]
struct Args {
    /// Backend origin; overrides console.toml and the environment.
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct RecordArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long, default_value = "")]
    observations: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit the creation form.
    Create(RecordArgs),
    /// Open the edit modal for a record and submit it.
    Edit {
        id: i64,
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Open the delete modal for a record and confirm it.
    Delete {
        id: i64,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Print one page of the directory.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    let api = HttpBusinessApi::new(config::normalize_base_url(&settings.base_url)?);
    tracing::info!(base_url = api.server_url(), "using backend");

    let outcome = match args.command {
        Command::Create(record) => run_create(&api, &record).await?,
        Command::Edit { id, record } => run_edit(&api, BusinessId(id), &record).await?,
        Command::Delete { id, name } => run_delete(&api, BusinessId(id), &name).await?,
        Command::List { page, per_page } => {
            let query = ListQuery::new(page, per_page.or(Some(settings.per_page)));
            return run_list(&api, query).await;
        }
    };

    if !outcome.leaves_page() {
        bail!("form was not submitted: {outcome:?}");
    }
    Ok(())
}

fn fill_form<S: PageSurface>(surface: &mut S, layout: &FormLayout, record: &RecordArgs) {
    surface.set_field_value(layout.name, &record.name);
    surface.set_field_value(layout.email, &record.email);
    surface.set_field_value(layout.phone, &record.phone);
    surface.set_field_value(layout.observations, &record.observations);
}

async fn run_create(api: &HttpBusinessApi, record: &RecordArgs) -> Result<FlowOutcome> {
    let mut page = TerminalPage::new(MemoryPage::create_page());
    let BoundPage::Create(create) = initialize(PageMode::from_path(page.path())) else {
        bail!("creation page did not bind its form");
    };
    fill_form(&mut page, create.layout(), record);
    Ok(create.submit(&mut page, api).await)
}

async fn run_edit(
    api: &HttpBusinessApi,
    id: BusinessId,
    record: &RecordArgs,
) -> Result<FlowOutcome> {
    let card = DetailCard::for_record(
        id,
        &record.name,
        &record.email,
        &record.phone,
        &record.observations,
    );
    let mut page = TerminalPage::new(MemoryPage::detail_page(id, Some(card)));
    let BoundPage::Detail(mut detail) = initialize(PageMode::from_path(page.path())) else {
        bail!("detail page did not bind its form");
    };

    let opened = detail.open_edit_modal(&mut page);
    if opened != FlowOutcome::Opened {
        return Ok(opened);
    }
    Ok(detail.submit_edit(&mut page, api).await)
}

async fn run_delete(api: &HttpBusinessApi, id: BusinessId, name: &str) -> Result<FlowOutcome> {
    let mut page = TerminalPage::new(MemoryPage::detail_page(id, None));
    let BoundPage::Detail(mut detail) = initialize(PageMode::from_path(page.path())) else {
        bail!("detail page did not bind its modals");
    };

    detail.open_delete_modal(&mut page, id, name);
    Ok(detail.confirm_delete(&mut page, api).await)
}

async fn run_list(api: &HttpBusinessApi, query: ListQuery) -> Result<()> {
    let page = api
        .list_businesses(query)
        .await
        .context("failed to list businesses")?;

    for business in &page.businesses {
        println!(
            "{:>6}  {:<30}  {:<30}  {:<16}  {}",
            business.id.0,
            business.name,
            business.email,
            business.phone,
            business.observations()
        );
    }
    println!(
        "page {} of {} ({} businesses)",
        page.current_page, page.pages, page.total
    );
    Ok(())
}
