//! Application state management for the terminal coupon generator.
//!
//! This module contains the main application state, the generation
//! workflow state machine, and mode management for the terminal user
//! interface.

use crate::domain::{
    coupon_description, GenerationOutcome, GenerationRequest, GenerationResult, Retailer,
    WorkflowState, RETAILER_CATALOG,
};
use std::time::{Duration, Instant};

/// How long the clipboard confirmation label stays visible.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Normal navigation mode - arrow keys move the catalog highlight
    Normal,
    /// Free-text entry mode - user is typing a retailer name
    EnteringRetailer,
    /// Help screen is displayed
    Help,
}

/// Main application state containing the workflow and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and manage one generation request at a time.
///
/// # Examples
///
/// ```
/// use couponhunt::application::{App, AppMode};
/// use couponhunt::domain::WorkflowState;
///
/// let app = App::default();
/// assert_eq!(app.workflow, WorkflowState::Idle);
/// assert!(matches!(app.mode, AppMode::Normal));
/// ```
#[derive(Debug)]
pub struct App {
    /// Current generation workflow state
    pub workflow: WorkflowState,
    /// Current application mode
    pub mode: AppMode,
    /// Highlighted row in the retailer catalog
    pub catalog_index: usize,
    /// Free-text retailer input buffer
    pub input: String,
    /// Cursor position within the input buffer
    pub cursor_position: usize,
    /// When the last clipboard copy happened, while its label is showing
    pub copied_at: Option<Instant>,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            workflow: WorkflowState::Idle,
            mode: AppMode::Normal,
            catalog_index: 0,
            input: String::new(),
            cursor_position: 0,
            copied_at: None,
            status_message: None,
            help_scroll: 0,
        }
    }
}

impl App {
    /// Moves the workflow into `Pending` for the given retailer.
    ///
    /// Any previous result or error is discarded along with the copy
    /// confirmation. While a request is already pending the call is
    /// ignored, so at most one request is outstanding no matter what the
    /// input layer lets through.
    ///
    /// # Arguments
    ///
    /// * `retailer` - The retailer to generate a coupon for
    pub fn start_generation(&mut self, retailer: Retailer) {
        if self.workflow.is_pending() {
            return;
        }
        self.status_message = None;
        self.copied_at = None;
        self.workflow = WorkflowState::Pending(retailer);
    }

    /// The request that still needs to be dispatched.
    ///
    /// Present exactly while the workflow is `Pending`; the event loop
    /// performs the call and feeds the outcome back through
    /// [`App::set_generation_result`].
    pub fn outstanding_request(&self) -> Option<GenerationRequest> {
        match &self.workflow {
            WorkflowState::Pending(retailer) => Some(GenerationRequest::new(retailer.clone())),
            _ => None,
        }
    }

    /// Applies the outcome of the outbound call.
    ///
    /// A code moves the workflow to `Succeeded` with the locally derived
    /// description attached; an error moves it to `Failed` with the
    /// displayable message. Ignored unless a request is pending, so a
    /// stray outcome can never clobber a later state.
    ///
    /// # Arguments
    ///
    /// * `outcome` - The generated code, or the error to surface
    pub fn set_generation_result(&mut self, outcome: GenerationOutcome) {
        let retailer = match &self.workflow {
            WorkflowState::Pending(retailer) => retailer.clone(),
            _ => return,
        };

        self.workflow = match outcome {
            Ok(code) => {
                let description = coupon_description(&retailer);
                WorkflowState::Succeeded(retailer, GenerationResult { code, description })
            }
            Err(error) => WorkflowState::Failed(retailer, error.to_string()),
        };
    }

    /// Moves the catalog highlight down one entry.
    pub fn select_next_retailer(&mut self) {
        if self.catalog_index + 1 < RETAILER_CATALOG.len() {
            self.catalog_index += 1;
        }
    }

    /// Moves the catalog highlight up one entry.
    pub fn select_previous_retailer(&mut self) {
        if self.catalog_index > 0 {
            self.catalog_index -= 1;
        }
    }

    /// Emits a generate event for the highlighted catalog entry.
    pub fn generate_selected(&mut self) {
        if let Some(retailer) = RETAILER_CATALOG
            .get(self.catalog_index)
            .and_then(|name| Retailer::parse(name))
        {
            self.start_generation(retailer);
        }
    }

    /// Switches to free-text retailer entry mode.
    ///
    /// Keeps whatever was previously typed and positions the cursor at
    /// the end.
    pub fn start_retailer_entry(&mut self) {
        self.mode = AppMode::EnteringRetailer;
        self.cursor_position = self.input.len();
        self.status_message = None;
    }

    /// Cancels free-text entry and returns to normal mode without
    /// emitting anything.
    pub fn cancel_retailer_entry(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Submits the free-text retailer entry.
    ///
    /// Input that trims to nothing is inert: nothing is emitted, no error
    /// is raised, and entry mode stays open. The same applies while a
    /// request is pending. A valid name emits the generate event and
    /// returns to normal mode.
    pub fn submit_retailer_entry(&mut self) {
        let Some(retailer) = Retailer::parse(&self.input) else {
            return;
        };
        if self.workflow.is_pending() {
            return;
        }

        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
        self.start_generation(retailer);
    }

    /// Records a clipboard copy so the confirmation label shows.
    ///
    /// Only meaningful while a result is on screen; ignored otherwise.
    /// Has no effect on the generation workflow.
    ///
    /// # Arguments
    ///
    /// * `now` - The instant the copy happened
    pub fn mark_copied(&mut self, now: Instant) {
        if self.workflow.result().is_some() {
            self.copied_at = Some(now);
        }
    }

    /// Whether the copy confirmation label is currently visible.
    pub fn copy_acknowledged(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Clears the copy confirmation once its display window has elapsed.
    ///
    /// Called from the event loop on every tick.
    ///
    /// # Arguments
    ///
    /// * `now` - The current instant
    pub fn tick(&mut self, now: Instant) {
        if let Some(copied_at) = self.copied_at {
            if now.duration_since(copied_at) >= COPY_ACK_DURATION {
                self.copied_at = None;
            }
        }
    }
}
