//! Event list view model: the last fetched events, the active filters and
//! the conflict checker of one screen. Realtime notifications only mark a
//! refetch as pending; `sync` performs them.

use crate::core::checker::ConflictChecker;
use crate::core::conflicts::{ConflictQuery, ConflictReport};
use crate::core::filter_state::EventFilters;
use crate::core::source::EventSource;
use crate::errors::AppResult;
use crate::models::Event;
use crate::realtime::{ChangeFeed, ChangeKind, SubscriptionId, Table};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
pub struct EventBoard {
    events: Vec<Event>,
    filters: EventFilters,
    checker: ConflictChecker,
    pending: Rc<Cell<usize>>,
    subscription: Option<SubscriptionId>,
}

impl EventBoard {
    pub fn new(filters: EventFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filters(&self) -> &EventFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut EventFilters {
        &mut self.filters
    }

    pub fn checker(&self) -> &ConflictChecker {
        &self.checker
    }

    /// Full refetch. On failure the previous list stays in place.
    pub fn refresh<S: EventSource + ?Sized>(&mut self, source: &mut S) -> AppResult<()> {
        self.events = source.load_events()?;
        log::debug!("board refreshed: {} events", self.events.len());
        Ok(())
    }

    /// Every insert/update/delete on `events` queues one refetch.
    pub fn attach(&mut self, feed: &mut ChangeFeed) -> SubscriptionId {
        if let Some(id) = self.subscription.take() {
            feed.unsubscribe(id);
        }

        let pending = Rc::clone(&self.pending);
        let id = feed.subscribe(Table::Events, &ChangeKind::ALL, move |_| {
            pending.set(pending.get() + 1);
        });
        self.subscription = Some(id);
        id
    }

    pub fn detach(&mut self, feed: &mut ChangeFeed) {
        if let Some(id) = self.subscription.take() {
            feed.unsubscribe(id);
        }
    }

    pub fn pending_refreshes(&self) -> usize {
        self.pending.get()
    }

    /// Runs one refetch per queued notification and returns how many ran.
    /// A failing refetch stops the loop and leaves the rest queued.
    pub fn sync<S: EventSource + ?Sized>(&mut self, source: &mut S) -> AppResult<usize> {
        let mut ran = 0;
        while self.pending.get() > 0 {
            self.refresh(source)?;
            self.pending.set(self.pending.get() - 1);
            ran += 1;
        }
        Ok(ran)
    }

    pub fn visible(&self) -> Vec<Event> {
        self.filters.apply(&self.events)
    }

    pub fn check_conflicts<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
        query: &ConflictQuery,
    ) -> Option<&ConflictReport> {
        self.checker.run(source, query)
    }
}
