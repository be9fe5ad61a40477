// dataclean-core/src/application/navigation.rs
//
// Which screen is showing and which overlays are open.
//
// The screen is one enum, so leaving a top-level view drops its detail
// selection by construction. Dialogs live beside it and are closed when
// the view or monitor detail that owns them goes away.

use crate::domain::catalog::{CheckType, SNOWFLAKE, integration_type};
use crate::domain::{Alert, DomainError, Integration, Monitor, QualityCheck};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopLevel {
    #[default]
    Monitors,
    Integrations,
    Alerts,
}

impl TopLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monitors => "monitors",
            Self::Integrations => "integrations",
            Self::Alerts => "alerts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    MonitorList,
    MonitorDetail(Monitor),
    Integrations,
    AlertList,
    /// Alerts of one monitor, by weak id.
    MonitorAlerts(String),
}

impl Screen {
    pub fn top_level(&self) -> TopLevel {
        match self {
            Screen::MonitorList | Screen::MonitorDetail(_) => TopLevel::Monitors,
            Screen::Integrations => TopLevel::Integrations,
            Screen::AlertList | Screen::MonitorAlerts(_) => TopLevel::Alerts,
        }
    }

    fn list_of(view: TopLevel) -> Screen {
        match view {
            TopLevel::Monitors => Screen::MonitorList,
            TopLevel::Integrations => Screen::Integrations,
            TopLevel::Alerts => Screen::AlertList,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    CreateMonitor,
    CheckTypeSelector,
    AddCheck,
    CheckDetail,
    AlertDetail,
    IntegrationDetail,
    IntegrationTypeSelector,
    SnowflakeConnection,
}

impl DialogKind {
    pub const ALL: &'static [DialogKind] = &[
        DialogKind::CreateMonitor,
        DialogKind::CheckTypeSelector,
        DialogKind::AddCheck,
        DialogKind::CheckDetail,
        DialogKind::AlertDetail,
        DialogKind::IntegrationDetail,
        DialogKind::IntegrationTypeSelector,
        DialogKind::SnowflakeConnection,
    ];

    /// View the dialog is opened from. It closes when that view is left.
    pub fn view(&self) -> TopLevel {
        match self {
            Self::CreateMonitor | Self::CheckTypeSelector | Self::AddCheck | Self::CheckDetail => {
                TopLevel::Monitors
            }
            Self::AlertDetail => TopLevel::Alerts,
            Self::IntegrationDetail | Self::IntegrationTypeSelector | Self::SnowflakeConnection => {
                TopLevel::Integrations
            }
        }
    }

    /// Dialogs that only exist inside one monitor's detail.
    pub fn belongs_to_monitor_detail(&self) -> bool {
        matches!(self, Self::CheckTypeSelector | Self::AddCheck | Self::CheckDetail)
    }
}

/// Overlay state. Any combination may be open at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dialogs {
    pub create_monitor: bool,
    pub check_type_selector: bool,
    pub add_check: Option<CheckType>,
    pub check_detail: Option<QualityCheck>,
    pub alert_detail: Option<Alert>,
    pub integration_detail: Option<Integration>,
    pub integration_type_selector: bool,
    pub snowflake_connection: bool,
}

impl Dialogs {
    pub fn is_open(&self, kind: DialogKind) -> bool {
        match kind {
            DialogKind::CreateMonitor => self.create_monitor,
            DialogKind::CheckTypeSelector => self.check_type_selector,
            DialogKind::AddCheck => self.add_check.is_some(),
            DialogKind::CheckDetail => self.check_detail.is_some(),
            DialogKind::AlertDetail => self.alert_detail.is_some(),
            DialogKind::IntegrationDetail => self.integration_detail.is_some(),
            DialogKind::IntegrationTypeSelector => self.integration_type_selector,
            DialogKind::SnowflakeConnection => self.snowflake_connection,
        }
    }
}

/// Session-scoped UI state. Driven by one discrete action at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigator {
    screen: Screen,
    dialogs: Dialogs,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn top_level(&self) -> TopLevel {
        self.screen.top_level()
    }

    pub fn dialogs(&self) -> &Dialogs {
        &self.dialogs
    }

    pub fn selected_monitor(&self) -> Option<&Monitor> {
        match &self.screen {
            Screen::MonitorDetail(m) => Some(m),
            _ => None,
        }
    }

    pub fn selected_monitor_group(&self) -> Option<&str> {
        match &self.screen {
            Screen::MonitorAlerts(id) => Some(id.as_str()),
            _ => None,
        }
    }

    // --- SCREEN TRANSITIONS ---

    /// Shows the list of `view`, discarding any detail selection.
    pub fn switch_to(&mut self, view: TopLevel) {
        self.set_screen(Screen::list_of(view));
    }

    pub fn select_monitor(&mut self, monitor: Monitor) -> Result<(), DomainError> {
        self.require(TopLevel::Monitors, "select a monitor")?;
        self.set_screen(Screen::MonitorDetail(monitor));
        Ok(())
    }

    pub fn select_monitor_group(&mut self, monitor_id: &str) -> Result<(), DomainError> {
        self.require(TopLevel::Alerts, "select a monitor's alerts")?;
        self.set_screen(Screen::MonitorAlerts(monitor_id.to_string()));
        Ok(())
    }

    /// Detail -> list of the same view. No-op on a list.
    pub fn back(&mut self) {
        self.set_screen(Screen::list_of(self.top_level()));
    }

    /// Swaps the shown monitor for a fresher copy with the same id.
    /// Falls back to the list when the monitor is gone.
    pub fn refresh_selected_monitor(&mut self, monitors: &[Monitor]) {
        let next = match &self.screen {
            Screen::MonitorDetail(current) => match monitors.iter().find(|m| m.id == current.id) {
                Some(fresh) => Screen::MonitorDetail(fresh.clone()),
                None => Screen::MonitorList,
            },
            _ => return,
        };
        self.set_screen(next);
    }

    /// Every screen change goes through here so overlays never outlive their owner.
    fn set_screen(&mut self, next: Screen) {
        let left_view = self.top_level() != next.top_level();
        let left_detail = match (&self.screen, &next) {
            (Screen::MonitorDetail(current), Screen::MonitorDetail(other)) => {
                current.id != other.id
            }
            (Screen::MonitorDetail(_), _) => true,
            _ => false,
        };
        let previous = self.top_level();
        self.screen = next;

        for kind in DialogKind::ALL {
            if (left_view && kind.view() == previous)
                || (left_detail && kind.belongs_to_monitor_detail())
            {
                self.close(*kind);
            }
        }
    }

    fn require(&self, view: TopLevel, action: &str) -> Result<(), DomainError> {
        if self.top_level() == view {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition(format!(
                "cannot {} while the {} view is active",
                action,
                self.top_level().as_str()
            )))
        }
    }

    // --- DIALOGS ---

    pub fn open_create_monitor(&mut self) {
        self.dialogs.create_monitor = true;
    }

    pub fn open_check_type_selector(&mut self) -> Result<(), DomainError> {
        if self.selected_monitor().is_none() {
            return Err(DomainError::InvalidTransition(
                "checks can only be added from a monitor's detail".into(),
            ));
        }
        self.dialogs.check_type_selector = true;
        Ok(())
    }

    /// Picking a type closes the selector and opens the add-check form for it.
    pub fn choose_check_type(&mut self, check_type: CheckType) -> Result<(), DomainError> {
        if !self.dialogs.check_type_selector {
            return Err(DomainError::InvalidTransition(
                "the check type selector is not open".into(),
            ));
        }
        self.dialogs.check_type_selector = false;
        self.dialogs.add_check = Some(check_type);
        Ok(())
    }

    pub fn open_check_detail(&mut self, check: QualityCheck) {
        self.dialogs.check_detail = Some(check);
    }

    pub fn open_alert_detail(&mut self, alert: Alert) {
        self.dialogs.alert_detail = Some(alert);
    }

    pub fn open_integration_detail(&mut self, integration: Integration) {
        self.dialogs.integration_detail = Some(integration);
    }

    pub fn open_integration_type_selector(&mut self) {
        self.dialogs.integration_type_selector = true;
    }

    /// Only Snowflake is offered; choosing it hands over to the connection dialog.
    pub fn choose_integration_type(&mut self, type_id: &str) -> Result<(), DomainError> {
        let chosen = integration_type(type_id)
            .ok_or_else(|| DomainError::unknown_variant("integration type", type_id))?;
        if chosen.id == SNOWFLAKE.id {
            self.dialogs.integration_type_selector = false;
            self.dialogs.snowflake_connection = true;
        }
        Ok(())
    }

    pub fn close(&mut self, kind: DialogKind) {
        match kind {
            DialogKind::CreateMonitor => self.dialogs.create_monitor = false,
            DialogKind::CheckTypeSelector => self.dialogs.check_type_selector = false,
            DialogKind::AddCheck => self.dialogs.add_check = None,
            DialogKind::CheckDetail => self.dialogs.check_detail = None,
            DialogKind::AlertDetail => self.dialogs.alert_detail = None,
            DialogKind::IntegrationDetail => self.dialogs.integration_detail = None,
            DialogKind::IntegrationTypeSelector => self.dialogs.integration_type_selector = false,
            DialogKind::SnowflakeConnection => self.dialogs.snowflake_connection = false,
        }
    }
}
