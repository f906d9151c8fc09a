//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard events into store mutations and
//! navigation transitions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a simulated sign-in is resolving): draws every
//!   ~80ms so the spinner stays smooth.
//! - **Idle**: sleeps up to 250ms in the event poll and only redraws on
//!   input, terminal resize, or a store change.
//!
//! Store changes are picked up through a subscription that flips a
//! dirty flag, so the loop never has to diff snapshots itself.
//!
//! ## Simulated Sign-in
//!
//! Sign-in has no backend; the home screen's sign-in keys start a
//! short loading phase that resolves inside the loop:
//! `set_loading(true)` → delay → `set_user(..)` or
//! `set_error("Failed to load user")` → `set_loading(false)`.
//! The store itself only stores; the sequencing lives here.

mod component;
mod components;
mod event;
pub mod navigation;
mod ui;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{info, warn};
use uuid::Uuid;

use crate::StartScreen;
use crate::core::config::ResolvedConfig;
use crate::core::state::User;
use crate::core::store::SessionStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailsEvent, DetailsScreen, HomeEvent, HomeScreen};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::navigation::{Navigator, Route};

/// How long the simulated sign-in stays in its loading phase.
const SIGN_IN_DELAY: Duration = Duration::from_millis(600);

const SIGN_IN_FAILURE_MESSAGE: &str = "Failed to load user";

/// What a pending sign-in resolves to once its delay elapses.
enum SignInOutcome {
    Success(User),
    Failure(&'static str),
}

/// An in-flight simulated sign-in.
struct PendingSignIn {
    attempt_id: Uuid,
    resolve_at: Instant,
    outcome: SignInOutcome,
}

fn initial_route(start: StartScreen, config: &ResolvedConfig) -> Route {
    match start {
        StartScreen::Home => Route::Home,
        StartScreen::Details => Route::Details {
            item_id: config.item_id.clone(),
        },
    }
}

pub fn run(start: StartScreen, config: ResolvedConfig) -> std::io::Result<()> {
    let store = Arc::new(SessionStore::new());
    let mut navigator = Navigator::new(initial_route(start, &config));

    // Redraw whenever the store changes, without diffing every frame.
    let dirty = Arc::new(AtomicBool::new(false));
    let _store_subscription = store.subscribe({
        let dirty = Arc::clone(&dirty);
        move |_| dirty.store(true, Ordering::Relaxed)
    });

    let mut terminal = ratatui::init();

    let mut pending_sign_in: Option<PendingSignIn> = None;
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let session = store.get();
        let animating = session.is_loading;
        if animating || dirty.swap(false, Ordering::Relaxed) {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, navigator.current(), spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // Screen dispatch: the active route decides what keys mean.
            match navigator.current().clone() {
                Route::Home => {
                    let mut home = HomeScreen::new(store.get(), 0);
                    if let Some(home_event) = home.handle_event(&event) {
                        match home_event {
                            HomeEvent::SignIn => {
                                pending_sign_in = Some(begin_sign_in(
                                    &store,
                                    SignInOutcome::Success(config.login_user.clone()),
                                ));
                            }
                            HomeEvent::SignInFailing => {
                                pending_sign_in = Some(begin_sign_in(
                                    &store,
                                    SignInOutcome::Failure(SIGN_IN_FAILURE_MESSAGE),
                                ));
                            }
                            HomeEvent::SignOut => {
                                info!("sign-out");
                                store.clear_user();
                            }
                            HomeEvent::OpenDetails => {
                                navigator.navigate(Route::Details {
                                    item_id: config.item_id.clone(),
                                });
                            }
                            HomeEvent::Quit => {
                                should_quit = true;
                            }
                        }
                    }
                }
                Route::Details { item_id } => {
                    let mut details = DetailsScreen::new(item_id);
                    if let Some(details_event) = details.handle_event(&event) {
                        match details_event {
                            DetailsEvent::Back => {
                                navigator.go_back();
                            }
                            DetailsEvent::Quit => {
                                should_quit = true;
                            }
                        }
                    }
                }
            }
        }

        // Resolve a finished simulated sign-in
        if pending_sign_in
            .as_ref()
            .is_some_and(|pending| Instant::now() >= pending.resolve_at)
        {
            if let Some(pending) = pending_sign_in.take() {
                match pending.outcome {
                    SignInOutcome::Success(user) => {
                        info!("sign-in attempt {} succeeded", pending.attempt_id);
                        store.set_user(user);
                    }
                    SignInOutcome::Failure(message) => {
                        warn!("sign-in attempt {} failed: {message}", pending.attempt_id);
                        store.set_error(Some(message.to_string()));
                    }
                }
                store.set_loading(false);
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Atrium shutting down");
    ratatui::restore();
    Ok(())
}

/// Flip the store into its loading phase and describe what the attempt
/// will resolve to. The attempt id ties the start/finish log lines
/// together.
fn begin_sign_in(store: &SessionStore, outcome: SignInOutcome) -> PendingSignIn {
    let attempt_id = Uuid::new_v4();
    match &outcome {
        SignInOutcome::Success(user) => {
            info!("sign-in attempt {attempt_id} started for user id {}", user.id);
        }
        SignInOutcome::Failure(_) => {
            info!("sign-in attempt {attempt_id} started (will fail)");
        }
    }
    store.set_loading(true);
    PendingSignIn {
        attempt_id,
        resolve_at: Instant::now() + SIGN_IN_DELAY,
        outcome,
    }
}
