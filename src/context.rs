//! Application Context
//!
//! Top-level view-selection state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::AdmitCardData;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the admin login check has passed - read
    pub logged_in: ReadSignal<bool>,
    set_logged_in: WriteSignal<bool>,
    /// Admit card preview currently open, if any - read
    pub admit_card: ReadSignal<Option<AdmitCardData>>,
    set_admit_card: WriteSignal<Option<AdmitCardData>>,
}

impl AppContext {
    pub fn new(
        logged_in: (ReadSignal<bool>, WriteSignal<bool>),
        admit_card: (
            ReadSignal<Option<AdmitCardData>>,
            WriteSignal<Option<AdmitCardData>>,
        ),
    ) -> Self {
        Self {
            logged_in: logged_in.0,
            set_logged_in: logged_in.1,
            admit_card: admit_card.0,
            set_admit_card: admit_card.1,
        }
    }

    /// Mark the login check as passed
    pub fn login(&self) {
        self.set_logged_in.set(true);
    }

    /// Return to the login view
    pub fn logout(&self) {
        self.set_logged_in.set(false);
        self.set_admit_card.set(None);
    }

    /// Open the admit card preview
    pub fn open_preview(&self, card: AdmitCardData) {
        self.set_admit_card.set(Some(card));
    }

    /// Close the admit card preview
    pub fn close_preview(&self) {
        self.set_admit_card.set(None);
    }
}
