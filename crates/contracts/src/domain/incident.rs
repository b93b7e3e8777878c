use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An operational issue under remediation.
///
/// Severity is technical urgency; impact is business consequence. They are
/// independent axes. The escalation level is set explicitly through
/// `escalate` or a patch; it is never derived from severity or age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: i32,
    /// External tracker id, e.g. "INC-2025-001". Unique.
    pub incident_id: String,
    pub title: String,
    pub description: String,
    /// critical, high, medium, low
    pub severity: String,
    /// open, investigating, resolved, closed
    pub status: String,
    pub assigned_team: Option<String>,
    pub impact: Option<String>,
    pub eta_minutes: Option<i32>,
    /// 1=team, 2=management, 3=executive
    pub escalation_level: i32,
    pub users_affected: Option<i32>,
    pub revenue_at_risk: Option<String>,
    pub current_action: Option<String>,
    pub action_eta_minutes: Option<i32>,
    pub action_owner: Option<String>,
    pub war_room_active: bool,
    pub war_room_participants: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Incident {
    /// Active means not yet resolved or closed.
    pub fn is_active(&self) -> bool {
        self.status != "resolved" && self.status != "closed"
    }

    /// Applies a partial update. Any status transition is accepted;
    /// `resolved_at` is stamped exactly when status becomes resolved or
    /// closed and is never cleared afterwards.
    pub fn apply(&mut self, patch: &IncidentPatch, now: DateTime<Utc>) {
        if let Some(v) = &patch.incident_id {
            self.incident_id = v.clone();
        }
        if let Some(v) = &patch.title {
            self.title = v.clone();
        }
        if let Some(v) = &patch.description {
            self.description = v.clone();
        }
        if let Some(v) = &patch.severity {
            self.severity = v.clone();
        }
        if let Some(v) = &patch.status {
            self.status = v.clone();
            if v == "resolved" || v == "closed" {
                self.resolved_at = Some(now);
            }
        }
        if let Some(v) = &patch.assigned_team {
            self.assigned_team = Some(v.clone());
        }
        if let Some(v) = &patch.impact {
            self.impact = Some(v.clone());
        }
        if let Some(v) = patch.eta_minutes {
            self.eta_minutes = Some(v);
        }
        if let Some(v) = patch.escalation_level {
            self.escalation_level = v;
        }
        if let Some(v) = patch.users_affected {
            self.users_affected = Some(v);
        }
        if let Some(v) = &patch.revenue_at_risk {
            self.revenue_at_risk = Some(v.clone());
        }
        if let Some(v) = &patch.current_action {
            self.current_action = Some(v.clone());
        }
        if let Some(v) = patch.action_eta_minutes {
            self.action_eta_minutes = Some(v);
        }
        if let Some(v) = &patch.action_owner {
            self.action_owner = Some(v.clone());
        }
        if let Some(v) = patch.war_room_active {
            self.war_room_active = v;
        }
        if let Some(v) = patch.war_room_participants {
            self.war_room_participants = v;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertIncident {
    pub incident_id: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub assigned_team: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub eta_minutes: Option<i32>,
    #[serde(default = "default_escalation_level")]
    pub escalation_level: i32,
    #[serde(default)]
    pub users_affected: Option<i32>,
    #[serde(default)]
    pub revenue_at_risk: Option<String>,
    #[serde(default)]
    pub current_action: Option<String>,
    #[serde(default)]
    pub action_eta_minutes: Option<i32>,
    #[serde(default)]
    pub action_owner: Option<String>,
    #[serde(default)]
    pub war_room_active: bool,
    #[serde(default)]
    pub war_room_participants: i32,
}

fn default_status() -> String {
    "open".to_string()
}

fn default_escalation_level() -> i32 {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentPatch {
    pub incident_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub assigned_team: Option<String>,
    pub impact: Option<String>,
    pub eta_minutes: Option<i32>,
    pub escalation_level: Option<i32>,
    pub users_affected: Option<i32>,
    pub revenue_at_risk: Option<String>,
    pub current_action: Option<String>,
    pub action_eta_minutes: Option<i32>,
    pub action_owner: Option<String>,
    pub war_room_active: Option<bool>,
    pub war_room_participants: Option<i32>,
}

/// Body of the manual escalation operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalateRequest {
    pub level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident() -> Incident {
        Incident {
            id: 1,
            incident_id: "INC-2025-001".to_string(),
            title: "Payment Gateway Timeout".to_string(),
            description: "Checkout failures".to_string(),
            severity: "critical".to_string(),
            status: "open".to_string(),
            assigned_team: Some("Payments".to_string()),
            impact: None,
            eta_minutes: Some(15),
            escalation_level: 1,
            users_affected: None,
            revenue_at_risk: None,
            current_action: None,
            action_eta_minutes: None,
            action_owner: None,
            war_room_active: false,
            war_room_participants: 0,
            created_at: None,
            resolved_at: None,
        }
    }

    #[test]
    fn resolving_stamps_resolved_at() {
        let mut inc = incident();
        let now = Utc::now();
        inc.apply(
            &IncidentPatch {
                status: Some("resolved".to_string()),
                ..Default::default()
            },
            now,
        );
        assert_eq!(inc.resolved_at, Some(now));
        assert!(!inc.is_active());
    }

    #[test]
    fn reopening_keeps_the_stamp() {
        let mut inc = incident();
        let first = Utc::now();
        inc.apply(
            &IncidentPatch {
                status: Some("closed".to_string()),
                ..Default::default()
            },
            first,
        );
        inc.apply(
            &IncidentPatch {
                status: Some("investigating".to_string()),
                ..Default::default()
            },
            Utc::now(),
        );
        assert_eq!(inc.resolved_at, Some(first));
        assert!(inc.is_active());
    }

    #[test]
    fn partial_patch_leaves_other_fields_alone() {
        let mut inc = incident();
        inc.apply(
            &IncidentPatch {
                escalation_level: Some(3),
                ..Default::default()
            },
            Utc::now(),
        );
        assert_eq!(inc.escalation_level, 3);
        assert_eq!(inc.status, "open");
        assert_eq!(inc.title, "Payment Gateway Timeout");
        assert_eq!(inc.eta_minutes, Some(15));
        assert!(inc.resolved_at.is_none());
    }
}
