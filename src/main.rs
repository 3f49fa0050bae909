//! Zellij plugin wrapper and entry point.
//!
//! The only place that talks to Zellij. Host events are translated into
//! [`popcorn::Event`]s, handed to the library's [`handle_event`], and the
//! resulting [`Action`]s are carried out with plugin API calls:
//!
//! ```text
//! Key ──────────────► map_key ─────────┐
//! WebRequestResult ─► RequestContext ──┼─► handle_event ─► Action
//! BeforeClose ──────► Teardown ────────┘                     │
//!                                                            ▼
//!                     web_request / rename_plugin_pane / hide_self
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` and `ChangeApplicationState`
//! 3. **Update**: Translate events, run the handler, execute actions
//! 4. **Close**: Release the pane title before unloading

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use popcorn::api::{FetchResponse, RequestContext};
use popcorn::{handle_event, map_key, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: popcorn::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: popcorn::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the state and subscribes to events.
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `WebRequestResult`: OMDb responses
    /// - `PermissionRequestResult`: Outcome of the permission prompt
    /// - `BeforeClose`: Last chance to restore the pane title
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        popcorn::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_url = %config.api_url,
            has_api_key = config.api_key.is_some(),
            title = %config.title,
            "parsed configuration"
        );
        self.app = popcorn::initialize(&config);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
            EventType::BeforeClose,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles a host event; returns `true` when the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            zellij_tile::prelude::Event::BeforeClose => Event::Teardown,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        popcorn::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let event = map_key(key, self.app.focus, self.app.search.query().is_empty());
        tracing::debug!(bare_key = ?key.bare_key, focus = ?self.app.focus, mapped = ?event, "key event");
        event
    }

    /// Responses without our tag came from someone else's request.
    fn map_web_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(context) = RequestContext::decode(context) else {
            tracing::debug!(status, "ignoring untagged web request result");
            return None;
        };

        tracing::debug!(
            kind = %context.kind,
            generation = context.generation.value(),
            status,
            body_len = body.len(),
            "web request completed"
        );

        Some(Event::FetchCompleted(FetchResponse {
            context,
            status,
            body,
        }))
    }

    fn execute_action(action: &Action) {
        match action {
            Action::Fetch(request) => {
                tracing::debug!(
                    kind = %request.context.kind,
                    generation = request.context.generation.value(),
                    "issuing web request"
                );
                web_request(
                    request.url.as_str(),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context.encode(),
                );
            }
            Action::SetPaneTitle(title) => {
                tracing::debug!(title = %title, "renaming plugin pane");
                rename_plugin_pane(get_plugin_ids().plugin_id, title.as_str());
            }
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
