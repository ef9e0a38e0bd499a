//! Command handlers for saved places.
//!
//! Each handler opens the store from the configured data directory. Every
//! command except `nearby` unlocks first, and an unlock failure is printed as
//! an alert before the command aborts.

use anyhow::Context;
use bucketlist_app::{EditSession, MapViewModel};
use bucketlist_core::{AppConfig, Coordinate, Location};
use bucketlist_geosearch::{GeosearchClient, LoadingState, NearbyPlacesFetcher};
use bucketlist_store::LocationStore;
use uuid::Uuid;

use crate::auth::TerminalAuthenticator;

type ViewModel = MapViewModel<TerminalAuthenticator>;

fn geosearch_client(config: &AppConfig) -> anyhow::Result<GeosearchClient> {
    GeosearchClient::with_base_url(
        config.geosearch_timeout_secs,
        &config.user_agent,
        &config.geosearch_base_url,
    )
    .context("failed to build geosearch client")
}

/// Opens the store and runs one unlock attempt.
async fn unlocked_view_model(config: &AppConfig) -> anyhow::Result<ViewModel> {
    let store = LocationStore::open(config.save_path());
    let mut vm = MapViewModel::new(TerminalAuthenticator::new(config.passcode.clone()), store);

    vm.unlock().await;
    if let Some(alert) = vm.pending_alert() {
        eprintln!("{}\n\n{}", alert.title, alert.message);
        vm.dismiss_alert();
    }
    if !vm.is_unlocked() {
        anyhow::bail!("places are locked");
    }
    Ok(vm)
}

pub(crate) async fn run_list(config: &AppConfig) -> anyhow::Result<()> {
    let vm = unlocked_view_model(config).await?;
    if vm.locations().is_empty() {
        println!("no saved places yet");
    }
    for location in vm.locations() {
        println!("{}", format_location(location));
    }
    Ok(())
}

pub(crate) async fn run_add(
    config: &AppConfig,
    coordinate: Coordinate,
    name: Option<String>,
    description: Option<String>,
) -> anyhow::Result<()> {
    let mut vm = unlocked_view_model(config).await?;
    let added = vm
        .add_location(coordinate)
        .ok_or_else(|| anyhow::anyhow!("invalid coordinate ({coordinate})"))?;

    let saved = if name.is_some() || description.is_some() {
        let name = name.unwrap_or_else(|| added.name.clone());
        let description = description.unwrap_or_else(|| added.description.clone());
        let edited = added.with_details(&name, &description);
        vm.select(added);
        vm.update(edited.clone());
        edited
    } else {
        added
    };

    println!("{}", format_location(&saved));
    Ok(())
}

pub(crate) async fn run_edit(
    config: &AppConfig,
    id: Uuid,
    name: Option<String>,
    description: Option<String>,
) -> anyhow::Result<()> {
    let mut vm = unlocked_view_model(config).await?;
    let location = vm
        .locations()
        .iter()
        .find(|l| l.id == id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no saved place with id {id}"))?;

    vm.select(location.clone());
    let mut session = EditSession::new(location, geosearch_client(config)?);
    session.load_nearby().await;

    println!("Nearby:");
    for line in format_loading_state(&session.loading_state()) {
        println!("  {line}");
    }

    if let Some(name) = name {
        session.set_name(name);
    }
    if let Some(description) = description {
        session.set_description(description);
    }

    let edited = session.finish();
    if vm.update(edited.clone()) {
        println!("{}", format_location(&edited));
    } else {
        tracing::warn!(%id, "selected place changed before saving; edit discarded");
    }
    Ok(())
}

pub(crate) async fn run_nearby(config: &AppConfig, coordinate: Coordinate) -> anyhow::Result<()> {
    let mut fetcher = NearbyPlacesFetcher::new(geosearch_client(config)?);
    fetcher.fetch_nearby(coordinate).await;
    for line in format_loading_state(&fetcher.state()) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn format_location(location: &Location) -> String {
    let mut line = format!(
        "{}  {}  ({})",
        location.id,
        location.name,
        location.coordinate()
    );
    if !location.description.is_empty() {
        line.push_str(" - ");
        line.push_str(&location.description);
    }
    line
}

pub(crate) fn format_loading_state(state: &LoadingState) -> Vec<String> {
    match state {
        LoadingState::Loading => vec!["Loading...".to_string()],
        LoadingState::Failed => vec!["Please try again later.".to_string()],
        LoadingState::Loaded(pages) if pages.is_empty() => vec!["Nothing nearby.".to_string()],
        LoadingState::Loaded(pages) => pages
            .iter()
            .map(|p| format!("{}: {}", p.title, p.summary()))
            .collect(),
    }
}
