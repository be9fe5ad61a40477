// dataclean-core/src/application/dashboard.rs
//
// One dashboard session: the injected collections, the load state of the
// integration list, navigation and the active search query.
//
// Collections are only ever swapped whole, never edited in place.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::application::aggregation::{
    AlertBuckets, alerts_for_monitor, compute_success_rate, group_alerts_by_monitor,
    partition_by_status,
};
use crate::application::integrations::{self, LoadState};
use crate::application::navigation::{DialogKind, Navigator, TopLevel};
use crate::application::search::search;
use crate::domain::draft::{CheckDraft, ConnectionForm, MonitorDraft, TestOutcome};
use crate::domain::{
    Alert, DomainError, Integration, Monitor, MonitorWithAlerts, SyncRecord,
};
use crate::error::DatacleanError;
use crate::ports::IntegrationSource;

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    monitors: Vec<Monitor>,
    alerts: Vec<Alert>,
    sync_history: Vec<SyncRecord>,
    integrations: LoadState,
    navigator: Navigator,
    search: String,
    connection_form: ConnectionForm,
}

/// Alerts view detail: the group header plus its alerts by status.
#[derive(Debug, PartialEq)]
pub struct MonitorAlertsDetail<'a> {
    pub summary: MonitorWithAlerts,
    pub alerts: AlertBuckets<'a>,
}

impl Dashboard {
    pub fn new(monitors: Vec<Monitor>, alerts: Vec<Alert>, sync_history: Vec<SyncRecord>) -> Self {
        Self {
            monitors,
            alerts,
            sync_history,
            ..Default::default()
        }
    }

    // --- COLLECTIONS ---

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn sync_history(&self) -> &[SyncRecord] {
        &self.sync_history
    }

    pub fn success_rate(&self) -> Option<f64> {
        compute_success_rate(&self.sync_history)
    }

    pub fn replace_monitors(&mut self, monitors: Vec<Monitor>) {
        self.monitors = monitors;
        self.navigator.refresh_selected_monitor(&self.monitors);
    }

    pub fn replace_alerts(&mut self, alerts: Vec<Alert>) {
        self.alerts = alerts;
    }

    // --- NAVIGATION ---

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Changing view starts from that view's list with an empty search box.
    pub fn switch_to(&mut self, view: TopLevel) {
        self.navigator.switch_to(view);
        self.search.clear();
    }

    pub fn select_monitor(&mut self, monitor_id: &str) -> Result<&Monitor, DomainError> {
        let monitor = self
            .monitors
            .iter()
            .find(|m| m.id == monitor_id)
            .cloned()
            .ok_or_else(|| DomainError::MonitorNotFound(monitor_id.to_string()))?;
        self.navigator.select_monitor(monitor)?;
        self.navigator
            .selected_monitor()
            .ok_or_else(|| DomainError::MonitorNotFound(monitor_id.to_string()))
    }

    pub fn select_monitor_group(&mut self, monitor_id: &str) -> Result<(), DomainError> {
        if !self.alerts.iter().any(|a| a.monitor_id == monitor_id) {
            return Err(DomainError::MonitorNotFound(monitor_id.to_string()));
        }
        self.navigator.select_monitor_group(monitor_id)
    }

    pub fn back(&mut self) {
        self.navigator.back();
    }

    // --- SEARCH & PROJECTIONS ---

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn visible_monitors(&self) -> Vec<Monitor> {
        search(&self.monitors, &self.search)
    }

    pub fn alert_groups(&self) -> Vec<MonitorWithAlerts> {
        group_alerts_by_monitor(&self.alerts)
    }

    pub fn visible_alert_groups(&self) -> Vec<MonitorWithAlerts> {
        search(&self.alert_groups(), &self.search)
    }

    pub fn visible_integrations(&self) -> Vec<Integration> {
        search(self.integrations.items(), &self.search)
    }

    /// `None` unless a monitor's alerts are open (or the group vanished).
    pub fn selected_alert_detail(&self) -> Option<MonitorAlertsDetail<'_>> {
        let id = self.navigator.selected_monitor_group()?;
        let summary = self
            .alert_groups()
            .into_iter()
            .find(|g| g.monitor_id == id)?;
        Some(MonitorAlertsDetail {
            summary,
            alerts: partition_by_status(alerts_for_monitor(&self.alerts, id)),
        })
    }

    // --- INTEGRATION LIST ---

    pub fn integrations(&self) -> &LoadState {
        &self.integrations
    }

    /// Marks the list as loading. Navigation and search stay usable meanwhile.
    pub fn begin_integrations_load(&mut self) {
        self.integrations = LoadState::Loading;
    }

    pub fn finish_integrations_load(&mut self, result: Result<Vec<Integration>, DatacleanError>) {
        self.integrations = LoadState::settle(result);
    }

    pub async fn reload_integrations(&mut self, source: &dyn IntegrationSource) {
        self.begin_integrations_load();
        let result = integrations::load_integrations(source).await;
        self.finish_integrations_load(result);
    }

    // --- FORMS ---

    /// Create-monitor dialog submit. The new monitor is active and has no checks.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn create_monitor(
        &mut self,
        draft: MonitorDraft,
        now: DateTime<Utc>,
    ) -> Result<Monitor, DomainError> {
        let schedule = draft.schedule;
        let monitor = draft.into_monitor(self.next_monitor_id(), now)?;

        let mut next = self.monitors.clone();
        next.push(monitor.clone());
        self.replace_monitors(next);
        self.navigator.close(DialogKind::CreateMonitor);

        info!(
            id = %monitor.id,
            table = %monitor.table,
            schedule = schedule.as_str(),
            "Monitor created"
        );
        Ok(monitor)
    }

    fn next_monitor_id(&self) -> String {
        let max = self
            .monitors
            .iter()
            .filter_map(|m| m.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Add-check dialog submit: validated, logged, dialog closed. Nothing is persisted.
    pub fn submit_check(&mut self, draft: CheckDraft) -> Result<CheckDraft, DomainError> {
        let chosen = self.navigator.dialogs().add_check.ok_or_else(|| {
            DomainError::InvalidTransition("the add-check dialog is not open".into())
        })?;
        if chosen.kind != draft.kind {
            return Err(DomainError::validation(
                "kind",
                format!(
                    "dialog is configuring a {} check, got {}",
                    chosen.kind.as_str(),
                    draft.kind.as_str()
                ),
            ));
        }
        let monitor = self
            .navigator
            .selected_monitor()
            .map(|m| m.id.clone())
            .ok_or_else(|| {
                DomainError::InvalidTransition(
                    "checks can only be added from a monitor's detail".into(),
                )
            })?;
        let draft = draft.validated()?;

        info!(
            monitor = %monitor,
            kind = draft.kind.as_str(),
            column = %draft.column,
            name = %draft.name,
            action = ?draft.action,
            params = ?draft.params,
            "Check created"
        );
        self.navigator.close(DialogKind::AddCheck);
        Ok(draft)
    }

    pub fn connection_form(&self) -> &ConnectionForm {
        &self.connection_form
    }

    pub fn connection_form_mut(&mut self) -> &mut ConnectionForm {
        &mut self.connection_form
    }

    pub async fn test_connection(
        &mut self,
        source: &dyn IntegrationSource,
    ) -> Result<TestOutcome, DatacleanError> {
        integrations::test_connection(source, &mut self.connection_form).await
    }

    /// On success closes the Snowflake dialog and reloads the list.
    pub async fn create_integration(
        &mut self,
        source: &dyn IntegrationSource,
        schema_name: &str,
        database_name: &str,
    ) -> Result<bool, DatacleanError> {
        let created = integrations::submit_connection(
            source,
            &mut self.connection_form,
            schema_name,
            database_name,
        )
        .await?;

        if created {
            self.navigator.close(DialogKind::SnowflakeConnection);
            self.reload_integrations(source).await;
        }
        Ok(created)
    }
}
